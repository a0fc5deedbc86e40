//! Query-string encoding for list/filter requests.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// A request type that can be sent as URL query parameters.
///
/// Implementors write each of their fields into the [`QueryBuilder`],
/// choosing per field whether an empty value is dropped.
pub trait QueryParams {
    fn write_query(&self, query: &mut QueryBuilder);
}

/// A scalar that can appear as a query value.
pub trait QueryValue {
    /// Whether this is the type's zero value (`""`, `0`, `false`).
    fn is_zero(&self) -> bool;

    fn to_query(&self) -> String;
}

impl QueryValue for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_query(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn to_query(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }

    fn to_query(&self) -> String {
        self.to_string()
    }
}

macro_rules! integer_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn to_query(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_query_value!(i32, i64, u32, u64, usize);

/// Collects query pairs, keyed and sorted by parameter name.
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    pairs: BTreeMap<String, Vec<String>>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always emit `key`, even for a zero value.
    pub fn append<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
        self.pairs
            .entry(key.to_string())
            .or_default()
            .push(value.to_query());
        self
    }

    /// Emit `key` unless `value` is the zero value.
    pub fn omit_empty<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
        if !value.is_zero() {
            self.append(key, value);
        }
        self
    }

    /// Emit `key` when set. `Some(0)` and `Some(false)` are kept; an empty
    /// string is dropped.
    pub fn optional<V: QueryValue>(&mut self, key: &str, value: Option<&V>) -> &mut Self {
        if let Some(value) = value {
            let text = value.to_query();
            if !text.is_empty() {
                self.pairs.entry(key.to_string()).or_default().push(text);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as `?k=v&...`, or `""` when nothing was written.
    pub fn finish(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
        for (key, values) in &self.pairs {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

/// Build the query string for `params`, including the leading `?`.
///
/// Returns an empty string when `params` is `None` or every field was
/// dropped.
pub fn build_query_string<P: QueryParams + ?Sized>(params: Option<&P>) -> String {
    let Some(params) = params else {
        return String::new();
    };

    let mut query = QueryBuilder::new();
    params.write_query(&mut query);
    query.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Filter {
        limit: Option<u32>,
        offset: Option<u32>,
        status: String,
        active: Option<bool>,
        archived: bool,
        page: u32,
    }

    impl QueryParams for Filter {
        fn write_query(&self, query: &mut QueryBuilder) {
            query
                .optional("limit", self.limit.as_ref())
                .optional("offset", self.offset.as_ref())
                .omit_empty("status", self.status.as_str())
                .optional("active", self.active.as_ref())
                .omit_empty("archived", &self.archived)
                .append("page", &self.page);
        }
    }

    fn parse(query: &str) -> HashMap<String, String> {
        let query = query.strip_prefix('?').expect("leading ?");
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn none_params_yield_empty_string() {
        assert_eq!(build_query_string::<Filter>(None), "");
    }

    #[test]
    fn unset_and_zero_fields_are_omitted() {
        let filter = Filter {
            limit: None,
            offset: None,
            status: String::new(),
            active: None,
            archived: false,
            page: 0,
        };
        let query = parse(&build_query_string(Some(&filter)));

        // only the unconditional field survives
        assert_eq!(query.len(), 1);
        assert_eq!(query["page"], "0");
    }

    #[test]
    fn set_fields_are_encoded() {
        let filter = Filter {
            limit: Some(10),
            offset: Some(0),
            status: "verified".into(),
            active: Some(false),
            archived: true,
            page: 2,
        };
        let query = parse(&build_query_string(Some(&filter)));

        assert_eq!(query["limit"], "10");
        assert_eq!(query["offset"], "0");
        assert_eq!(query["status"], "verified");
        assert_eq!(query["active"], "false");
        assert_eq!(query["archived"], "true");
        assert_eq!(query["page"], "2");
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut query = QueryBuilder::new();
        query.omit_empty("search", "hello world&more");
        let encoded = query.finish();

        assert!(!encoded.contains(' '));
        assert_eq!(parse(&encoded)["search"], "hello world&more");
    }

    #[test]
    fn empty_optional_string_is_dropped() {
        let mut query = QueryBuilder::new();
        query.optional("domain", Some(&String::new()));
        assert!(query.is_empty());
        assert_eq!(query.finish(), "");
    }
}
