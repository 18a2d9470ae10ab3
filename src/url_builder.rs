use url::form_urlencoded;

/// Ordered list of query parameters. A key may appear more than once.
pub type QueryParams = Vec<(String, String)>;

const KEY_PARAM: &str = "key";

#[derive(Debug, Clone)]
pub struct Url {
    base: String,
    query_params: QueryParams,
}

impl Url {
    pub fn new(base: &str) -> Self {
        Url {
            base: base.to_string(),
            query_params: Vec::new(),
        }
    }

    pub fn add_arg(mut self, key: &str, value: &str) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn add_args<K, V>(mut self, args: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .extend(args.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the authentication key, dropping any `key` entry already present.
    pub fn with_key(mut self, api_key: &str) -> Self {
        self.query_params.retain(|(k, _)| k != KEY_PARAM);
        self.query_params
            .push((KEY_PARAM.to_string(), api_key.to_string()));
        self
    }

    ///
    /// # build
    /// Encode the query string and append it to the base.
    ///
    /// Parameters are sorted by key so the output is stable. The sort is
    /// stable, so repeated keys keep their insertion order.
    pub fn build(&self) -> String {
        if self.query_params.is_empty() {
            return self.base.clone();
        }

        let mut params: Vec<&(String, String)> = self.query_params.iter().collect();
        params.sort_by(|a, b| a.0.cmp(&b.0));

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.into_iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();

        format!("{}?{}", self.base, query)
    }
}

/// Build an authenticated URL from a base endpoint and query parameters.
pub fn build_url(base: &str, params: QueryParams, api_key: &str) -> String {
    Url::new(base).add_args(params).with_key(api_key).build()
}

/// Copy of `url` with the value of the `key` parameter masked, for logs and
/// error text.
pub(crate) fn redact_key(url: &str) -> String {
    let Ok(mut parsed) = url::Url::parse(url) else {
        return url.to_string();
    };
    redact_key_in_place(&mut parsed);
    parsed.to_string()
}

pub(crate) fn redact_key_in_place(url: &mut url::Url) {
    if !url.query_pairs().any(|(k, _)| k == KEY_PARAM) {
        return;
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == KEY_PARAM { "REDACTED".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();

    url.query_pairs_mut().clear().extend_pairs(pairs);
}
