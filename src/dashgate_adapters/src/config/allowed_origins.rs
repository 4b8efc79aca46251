use std::sync::Arc;

use http::HeaderValue;
use http::header::InvalidHeaderValue;

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Arc<Vec<HeaderValue>>);

impl AllowedOrigins {
    pub fn parse<I, S>(origins: I) -> Result<Self, InvalidHeaderValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .map(|origin| HeaderValue::from_str(origin.as_ref().trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(Arc::new(origins)))
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
