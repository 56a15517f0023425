//! Authentication result model handed back to the host pipeline.
//!
//! The callback handler maps provider response fields into this model: the provider's
//! stable user identifier becomes the subject, profile fields become subject
//! attributes, and the freshly issued token pair becomes context attributes the host
//! may persist if configured to.

// self
use crate::_prelude::*;

/// Single named attribute inside subject or context collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
	/// Attribute name.
	pub name: String,
	/// Attribute value.
	pub value: String,
}
impl Attribute {
	/// Creates an attribute from a name/value pair.
	pub fn of(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self { name: name.into(), value: value.into() }
	}
}

/// Ordered collection of attributes with name-based lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes(Vec<Attribute>);
impl Attributes {
	/// Collects attributes into a new collection.
	pub fn of(attributes: impl IntoIterator<Item = Attribute>) -> Self {
		Self(attributes.into_iter().collect())
	}

	/// Returns the value of the first attribute named `name`, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|attribute| attribute.name == name)
			.map(|attribute| attribute.value.as_str())
	}

	/// Iterates over the attributes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
		self.0.iter()
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when the collection holds no attributes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Subject attributes anchored on the provider-issued subject identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAttributes {
	/// Subject identifier (the provider's stable user id).
	pub subject: String,
	/// Attributes describing the subject.
	pub attributes: Attributes,
}
impl SubjectAttributes {
	/// Creates subject attributes for the provided identifier.
	pub fn of(subject: impl Into<String>, attributes: Attributes) -> Self {
		Self { subject: subject.into(), attributes }
	}
}

/// Context attributes carried alongside the subject (issued token material).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAttributes {
	/// Attributes describing the authentication context.
	pub attributes: Attributes,
}
impl ContextAttributes {
	/// Wraps a collection of context attributes.
	pub fn of(attributes: Attributes) -> Self {
		Self { attributes }
	}
}

/// Authentication result produced by the callback handler and consumed by the host's
/// authentication pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
	/// Subject identifier and attributes.
	pub subject: SubjectAttributes,
	/// Context attributes (access token and token secret).
	pub context: ContextAttributes,
}
impl AuthenticationResult {
	/// Combines subject and context attributes into a result.
	pub fn new(subject: SubjectAttributes, context: ContextAttributes) -> Self {
		Self { subject, context }
	}

	/// Returns the subject identifier.
	pub fn subject_id(&self) -> &str {
		&self.subject.subject
	}
}
