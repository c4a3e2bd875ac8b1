//! List query parsing
//!
//! Raw list parameters become a [`SearchQuery`] only after passing a
//! fail-fast check; the first problem found is reported as
//! `CatalogError::InvalidQuery`.

use std::collections::BTreeSet;

use kernel::id::Id;
use kernel::pagination::{SearchQuery, SortDirection};
use kernel::validation::{Error, FailFast, StepError, ValidationHandler};

use crate::application::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult, Step};

/// Raw list parameters shared by every list use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInput {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub terms: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

/// Check raw parameters against `config` and the sortable fields
pub fn build_query(
    config: &CatalogConfig,
    input: ListInput,
    default_sort: &str,
    sortable: &[&str],
) -> CatalogResult<SearchQuery> {
    let mut handler = FailFast::create();
    let query = parse_query(&mut handler, config, input, default_sort, sortable)?;
    handler.into_result().map_err(CatalogError::InvalidQuery)?;
    Ok(query)
}

/// Same as [`build_query`] but leaves the handler open for further checks
pub(crate) fn parse_query<H: ValidationHandler>(
    handler: &mut H,
    config: &CatalogConfig,
    input: ListInput,
    default_sort: &str,
    sortable: &[&str],
) -> CatalogResult<SearchQuery> {
    let per_page = input.per_page.unwrap_or(config.default_per_page);
    if per_page == 0 || per_page > config.max_per_page {
        handler.append(Error::new(format!(
            "'perPage' must be between 1 and {}",
            config.max_per_page
        )));
    }

    let sort = input
        .sort
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_sort.to_string());
    if !sortable.contains(&sort.as_str()) {
        handler.append(Error::new(format!(
            "'sort' must be one of: {}",
            sortable.join(", ")
        )));
    }

    let direction = match input.direction {
        Some(raw) => handler
            .validate(|| -> Step<SortDirection> { raw.parse().map_err(StepError::invalid) })?
            .unwrap_or_default(),
        None => SortDirection::default(),
    };

    Ok(SearchQuery {
        page: input.page.unwrap_or(0),
        per_page,
        terms: input.terms.unwrap_or_default(),
        sort,
        direction,
    })
}

/// Parse raw relation ids used as list filters
pub(crate) fn parse_ids<H, T>(handler: &mut H, field: &str, raw: &[String]) -> CatalogResult<BTreeSet<Id<T>>>
where
    H: ValidationHandler,
{
    let mut ids = BTreeSet::new();
    for value in raw {
        let parsed = handler.validate(|| -> Step<Id<T>> {
            Id::parse_str(value)
                .map_err(|_| StepError::invalid(format!("'{field}' contains an invalid id: {value}")))
        })?;
        if let Some(id) = parsed {
            ids.insert(id);
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::CategoryId;

    const SORTABLE: &[&str] = &["name", "createdAt"];

    fn build(input: ListInput) -> CatalogResult<SearchQuery> {
        build_query(&CatalogConfig::default(), input, "name", SORTABLE)
    }

    fn first_message(err: CatalogError) -> String {
        err.errors()
            .first()
            .map(|e| e.message().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_defaults() {
        let query = build(ListInput::default()).unwrap();
        assert_eq!(query.page, 0);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.sort, "name");
        assert_eq!(query.direction, SortDirection::Asc);
        assert!(query.terms.is_empty());
    }

    #[test]
    fn test_explicit_values() {
        let query = build(ListInput {
            page: Some(2),
            per_page: Some(5),
            terms: Some("act".into()),
            sort: Some("createdAt".into()),
            direction: Some("desc".into()),
        })
        .unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 5);
        assert_eq!(query.sort, "createdAt");
        assert_eq!(query.direction, SortDirection::Desc);
    }

    #[test]
    fn test_per_page_out_of_range() {
        let err = build(ListInput {
            per_page: Some(0),
            ..ListInput::default()
        })
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidQuery(_)));
        assert_eq!(first_message(err), "'perPage' must be between 1 and 50");
    }

    #[test]
    fn test_only_first_problem_is_reported() {
        let err = build(ListInput {
            per_page: Some(1000),
            sort: Some("password".into()),
            direction: Some("sideways".into()),
            ..ListInput::default()
        })
        .unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(first_message(err), "'perPage' must be between 1 and 50");
    }

    #[test]
    fn test_unknown_sort() {
        let err = build(ListInput {
            sort: Some("password".into()),
            ..ListInput::default()
        })
        .unwrap_err();
        assert_eq!(first_message(err), "'sort' must be one of: name, createdAt");
    }

    #[test]
    fn test_invalid_direction() {
        let err = build(ListInput {
            direction: Some("sideways".into()),
            ..ListInput::default()
        })
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidQuery(_)));
    }

    #[test]
    fn test_parse_ids() {
        let id = CategoryId::new();
        let mut handler = FailFast::create();
        let ids: BTreeSet<CategoryId> =
            parse_ids(&mut handler, "categories", &[id.to_string(), id.to_string()]).unwrap();
        assert!(!handler.has_error());
        assert_eq!(ids.len(), 1);

        let mut handler = FailFast::create();
        let ids: BTreeSet<CategoryId> =
            parse_ids(&mut handler, "categories", &["nope".to_string()]).unwrap();
        assert!(ids.is_empty());
        assert_eq!(
            handler.first_error().map(Error::message),
            Some("'categories' contains an invalid id: nope")
        );
    }
}
