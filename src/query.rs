use url::Url;

/// Query-string variables in first-seen key order.
///
/// A repeated key keeps its original position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryVars {
    entries: Vec<(String, String)>,
}

impl QueryVars {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool { self.get(key).is_some() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}

/// Extract the query string of `url` (absolute, relative, or just `?a=b`).
///
/// Relative inputs resolve against a placeholder origin, so a `?` inside the
/// fragment is not a query. Never fails; unparseable input has no variables.
pub fn parse_query(url: &str) -> QueryVars {
    let resolved = Url::parse(PAGE_ORIGIN).and_then(|base| base.join(url));
    match resolved {
        Ok(page) => page.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect(),
        Err(e) => {
            tracing::debug!(url, error = %e, "unparseable page url; no query variables");
            QueryVars::new()
        }
    }
}

const PAGE_ORIGIN: &str = "http://localhost/";
