//! SQL rendering of visit query values.
//!
//! Statements are assembled with [`QueryBuilder`] so every caller-supplied
//! value is a bind parameter. Predicate helpers are shared between the scan,
//! listing and count statements so the three always filter the same way.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::DateRange;
use crate::domain::query::{BlockQuery, LocationFilter, PageQuery, VisitCriteria};

/// Full visit row with its optional location, aliased `v` and `vl`.
pub(crate) const SELECT_VISITS: &str = "SELECT v.id, v.short_url_id, v.date, v.referer, \
     v.remote_addr, v.user_agent, vl.id AS location_id, vl.country_code, vl.country_name, \
     vl.region_name, vl.city_name, vl.latitude, vl.longitude, vl.timezone, vl.is_empty \
     FROM visits v";

const JOIN_LOCATIONS: &str = " LEFT JOIN visit_locations vl ON vl.id = v.visit_location_id";

type Conditions<'qb, 'args> = Separated<'qb, 'args, Postgres, &'static str>;

/// `<column> > after_id`
pub(crate) fn push_id_after(conditions: &mut Conditions<'_, '_>, column: &str, after_id: i64) {
    conditions
        .push(format_args!("{column} > "))
        .push_bind_unseparated(after_id);
}

/// `<column> >= start` and `<column> <= end` for whichever bounds are set.
pub(crate) fn push_date_range(conditions: &mut Conditions<'_, '_>, column: &str, range: &DateRange) {
    if let Some(start_date) = range.start_date {
        conditions
            .push(format_args!("{column} >= "))
            .push_bind_unseparated(start_date);
    }
    if let Some(end_date) = range.end_date {
        conditions
            .push(format_args!("{column} <= "))
            .push_bind_unseparated(end_date);
    }
}

/// Location presence condition over the `v`/`vl` aliases.
pub(crate) fn push_location_filter(conditions: &mut Conditions<'_, '_>, filter: LocationFilter) {
    match filter {
        LocationFilter::All => {}
        LocationFilter::Unlocated => {
            conditions.push("v.visit_location_id IS NULL");
        }
        LocationFilter::EmptyLocation => {
            conditions.push("vl.is_empty = TRUE");
        }
    }
}

/// Short URL equality plus date range, over unqualified `visits` columns.
pub(crate) fn push_criteria(conditions: &mut Conditions<'_, '_>, criteria: &VisitCriteria) {
    conditions
        .push("short_url_id = ")
        .push_bind_unseparated(criteria.short_url_id);
    push_date_range(conditions, "date", &criteria.date_range);
}

/// One keyset block, ascending by id.
pub(crate) fn block_statement(query: &BlockQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_VISITS);
    qb.push(JOIN_LOCATIONS).push(" WHERE ");
    {
        let mut conditions = qb.separated(" AND ");
        push_id_after(&mut conditions, "v.id", query.after_id);
        push_location_filter(&mut conditions, query.filter);
    }
    qb.push(" ORDER BY v.id ASC LIMIT ")
        .push_bind(i64::from(query.block_size));
    qb
}

/// One listing page, descending by id.
///
/// The derived table selects only identifiers, so limit and offset are
/// applied on the narrow index-backed projection. Full rows and locations are
/// joined afterwards against at most `limit` identifiers.
pub(crate) fn page_statement(query: &PageQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_VISITS);
    qb.push(" INNER JOIN (SELECT id FROM visits WHERE ");
    {
        let mut conditions = qb.separated(" AND ");
        push_criteria(&mut conditions, &query.criteria);
    }
    qb.push(" ORDER BY id DESC LIMIT ")
        .push_bind(query.limit)
        .push(" OFFSET ")
        .push_bind(query.offset)
        .push(") page ON page.id = v.id")
        .push(JOIN_LOCATIONS)
        .push(" ORDER BY v.id DESC");
    qb
}

/// Number of visits matching the criteria; no join needed.
pub(crate) fn count_statement(criteria: &VisitCriteria) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM visits WHERE ");
    {
        let mut conditions = qb.separated(" AND ");
        push_criteria(&mut conditions, criteria);
    }
    qb
}
