//! Storefront domain type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShopDomain`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopDomainError {
    /// The input string is empty.
    #[error("shop domain cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("shop domain must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("shop domain cannot contain whitespace")]
    Whitespace,
    /// The input includes a URL scheme such as `https://`.
    #[error("shop domain must not include a scheme (got {0:?})")]
    HasScheme(String),
    /// The input has no dot, so it cannot be a hostname.
    #[error("shop domain must contain a dot")]
    MissingDot,
}

/// A tenant's storefront domain, e.g. `acme.myshopify.com`.
///
/// Generated snippets embed the domain verbatim so the runtime knows which
/// tenant's reviews to fetch. Catalogs and configuration parse into this type;
/// the snippet generator itself takes whatever string the config carries.
///
/// ## Constraints
///
/// - Length: 1-255 characters
/// - No whitespace and no `scheme://` prefix
/// - Must contain at least one dot
///
/// ## Examples
///
/// ```
/// use trustloop_core::ShopDomain;
///
/// assert!(ShopDomain::parse("acme.myshopify.com").is_ok());
/// assert!(ShopDomain::parse("reviews.acme.co.uk").is_ok());
///
/// assert!(ShopDomain::parse("").is_err());
/// assert!(ShopDomain::parse("https://acme.myshopify.com").is_err());
/// assert!(ShopDomain::parse("localhost").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Maximum length of a DNS hostname.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `ShopDomain` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains whitespace,
    /// carries a URL scheme, or has no dot.
    pub fn parse(s: &str) -> Result<Self, ShopDomainError> {
        if s.is_empty() {
            return Err(ShopDomainError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ShopDomainError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(ShopDomainError::Whitespace);
        }

        if let Some((scheme, _)) = s.split_once("://") {
            return Err(ShopDomainError::HasScheme(scheme.to_owned()));
        }

        if !s.contains('.') {
            return Err(ShopDomainError::MissingDot);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ShopDomain` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this is a `*.myshopify.com` permanent domain.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.0.ends_with(".myshopify.com")
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ShopDomain {
    type Err = ShopDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShopDomain {
    type Error = ShopDomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ShopDomain> for String {
    fn from(domain: ShopDomain) -> Self {
        domain.0
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
