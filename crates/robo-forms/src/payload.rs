//! Submission payload
//!
//! An ordered list of key/value pairs plus a separate list of file pairs.
//! Duplicate keys are kept as-is: checkbox groups and multi-selects send
//! one pair per selected value.

use url::form_urlencoded;

use crate::error::FormResult;
use crate::field::PayloadChannel;
use crate::form::{FieldId, Form, FormMethod};

/// Serialized form data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    data: Vec<(String, String)>,
    files: Vec<(String, String)>,
}

/// Payload split the way an HTTP client takes it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestArguments {
    /// Query string pairs (GET)
    pub params: Vec<(String, String)>,
    /// Body pairs (everything but GET)
    pub data: Vec<(String, String)>,
    /// File pairs, name to local path
    pub files: Vec<(String, String)>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair to `channel`
    pub fn push(&mut self, channel: PayloadChannel, key: impl Into<String>, value: impl Into<String>) {
        let pair = (key.into(), value.into());
        match channel {
            PayloadChannel::Data => self.data.push(pair),
            PayloadChannel::Files => self.files.push(pair),
        }
    }

    /// Append pairs to `channel`, keeping their order
    pub fn extend<I>(&mut self, channel: PayloadChannel, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in pairs {
            self.push(channel, key, value);
        }
    }

    /// Scalar pairs
    pub fn data(&self) -> &[(String, String)] {
        &self.data
    }

    /// File pairs
    pub fn files(&self) -> &[(String, String)] {
        &self.files
    }

    /// First scalar value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every scalar value for `key`, in order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.data
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.iter().chain(&self.files).any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.data.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.files.is_empty()
    }

    /// Scalar pairs as `application/x-www-form-urlencoded`
    pub fn to_url_encoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.data)
            .finish()
    }

    /// Route pairs by method: query params for GET, body otherwise
    pub fn to_request_arguments(&self, method: FormMethod) -> RequestArguments {
        let (params, data) = match method {
            FormMethod::Get => (self.data.clone(), Vec::new()),
            FormMethod::Post => (Vec::new(), self.data.clone()),
        };
        RequestArguments {
            params,
            data,
            files: self.files.clone(),
        }
    }
}

/// Serialize `form`'s fields in document order
///
/// Submit controls only contribute when they are the active one.
pub fn serialize(form: &Form, submit: Option<FieldId>) -> FormResult<Payload> {
    let active = form.active_submit(submit)?;
    let mut payload = Payload::new();

    for (id, field) in form.iter() {
        let pairs = if field.is_submit_option() {
            if Some(id) != active || field.is_disabled() {
                continue;
            }
            field.entries()
        } else {
            field.serialize()
        };
        payload.extend(field.channel(), pairs);
    }

    Ok(payload)
}
