//! Candidate actions returned by the lighting backend.
//!
//! The query endpoint answers with a loosely-typed JSON array. Each element is
//! validated into a [`Candidate`], an explicit sum type over the subject being
//! controlled (a light or a group) and the directive applied to it (on/off, a
//! color, or a scene), or an informational special message.
//!
//! Every candidate also keeps the exact JSON text it was parsed from as an
//! [`ActionPayload`]. Submitting a candidate resends that text byte-for-byte; the
//! client never rebuilds the payload from the parsed fields.
//!
//! # Wire Format
//!
//! ```json
//! [
//!   {"light": {"id": 3, "data": {"name": "Kitchen Ceiling"}}, "onoff": "on"},
//!   {"group": {"name": "Living Room"}, "scene": {"data": {"name": "Energize"}}},
//!   {"group": {"name": "Bedroom"}, "color": "#ff8800"},
//!   {"special": {"id": "link", "data": {"message": "Press the link button"}}}
//! ]
//! ```
//!
//! Names and messages are accepted both directly on the object and nested under
//! `data`, which is how the backend serializes its bridge records.

use crate::domain::error::{ConsoleError, Result};
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;

/// The exact JSON text of one query result, resent unchanged on submission.
#[derive(Clone)]
pub struct ActionPayload(Box<RawValue>);

impl ActionPayload {
    /// Returns the payload text as received from the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// Returns the payload bytes as received from the backend.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.get().as_bytes()
    }
}

impl PartialEq for ActionPayload {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ActionPayload {}

impl fmt::Debug for ActionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActionPayload").field(&self.as_str()).finish()
    }
}

/// On/off state requested by a toggle directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

/// The thing a candidate controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A single light bulb.
    Light { name: String },
    /// A room or zone grouping several lights.
    Group { name: String },
}

impl Subject {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Light { name } | Self::Group { name } => name,
        }
    }
}

/// What to do with the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Switch the subject on or off.
    Toggle(Toggle),
    /// Set the subject to a CSS color string (e.g. `"red"` or `"#ff8800"`).
    Color(String),
    /// Activate a scene on a group.
    Scene { name: String },
}

/// Shape of a candidate: a lighting action, or an informational message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateKind {
    /// A lighting action on a subject.
    ///
    /// The directive may be absent; such a candidate still round-trips to the
    /// backend unchanged and renders as a lone subject crumb.
    Action {
        subject: Subject,
        directive: Option<Directive>,
    },

    /// A non-actionable message such as help text.
    Special { message: String },
}

/// One matchable action returned by the backend for a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: CandidateKind,

    /// Diagnostics attached by the backend in debug mode, rendered verbatim.
    pub debug: Option<Value>,

    /// The exact JSON this candidate was parsed from.
    pub payload: ActionPayload,
}

impl Candidate {
    /// Parses and validates a single candidate from its raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Parse`] if the JSON is malformed or if the
    /// candidate does not have exactly one subject, has more than one directive,
    /// or mixes a special message with a subject or directive.
    pub fn from_raw(raw: Box<RawValue>) -> Result<Self> {
        let wire: WireCandidate = serde_json::from_str(raw.get())
            .map_err(|e| ConsoleError::Parse(format!("malformed candidate: {e}")))?;
        let debug = wire.debug.clone();
        let kind = wire.into_kind()?;

        Ok(Self {
            kind,
            debug,
            payload: ActionPayload(raw),
        })
    }

    /// Returns `true` for informational candidates.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(self.kind, CandidateKind::Special { .. })
    }

    /// Returns a short human-readable description for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            CandidateKind::Special { message } => format!("special: {message}"),
            CandidateKind::Action { subject, directive } => {
                let who = match subject {
                    Subject::Light { name } => format!("light {name:?}"),
                    Subject::Group { name } => format!("group {name:?}"),
                };
                let what = match directive {
                    Some(Directive::Toggle(Toggle::On)) => "turn on".to_string(),
                    Some(Directive::Toggle(Toggle::Off)) => "turn off".to_string(),
                    Some(Directive::Color(color)) => format!("turn {color}"),
                    Some(Directive::Scene { name }) => format!("activate {name:?}"),
                    None => "no directive".to_string(),
                };
                format!("{who}: {what}")
            }
        }
    }
}

/// Ordered candidates from one query response, in server order.
///
/// A result set replaces the previous one as a whole; it is never merged or
/// reordered client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    candidates: Vec<Candidate>,
}

impl ResultSet {
    /// Parses a query response body.
    ///
    /// The body must be a JSON array; every element must validate as a
    /// [`Candidate`]. One invalid element rejects the whole response so the
    /// previous results stay on screen instead of a partial list.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Parse`] if the body is not an array or any element
    /// fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use huelio_console::domain::ResultSet;
    ///
    /// let body = br#"[{"light": {"name": "Kitchen Ceiling"}, "onoff": "on"}]"#;
    /// let results = ResultSet::from_json(body).unwrap();
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(
    ///     results.get(0).unwrap().payload.as_str(),
    ///     r#"{"light": {"name": "Kitchen Ceiling"}, "onoff": "on"}"#
    /// );
    /// ```
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let elements: Vec<Box<RawValue>> = serde_json::from_slice(body)
            .map_err(|e| ConsoleError::Parse(format!("expected a JSON array: {e}")))?;

        let candidates = elements
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Candidate::from_raw(raw).map_err(|e| match e {
                    ConsoleError::Parse(msg) => ConsoleError::Parse(format!("element {index}: {msg}")),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { candidates })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[derive(Debug, Default, Deserialize)]
struct WireData {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// A subject, scene or special object; the text lives either on the object or under `data`.
#[derive(Debug, Default, Deserialize)]
struct WireObject {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<WireData>,
}

impl WireObject {
    fn name(self, what: &str) -> Result<String> {
        self.name
            .or_else(|| self.data.and_then(|d| d.name))
            .ok_or_else(|| ConsoleError::Parse(format!("{what} without a name")))
    }

    fn message(self) -> Result<String> {
        self.message
            .or_else(|| self.data.and_then(|d| d.message))
            .ok_or_else(|| ConsoleError::Parse("special without a message".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    #[serde(default)]
    light: Option<WireObject>,
    #[serde(default)]
    group: Option<WireObject>,
    #[serde(default)]
    onoff: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    scene: Option<WireObject>,
    #[serde(default)]
    special: Option<WireObject>,
    #[serde(default)]
    debug: Option<Value>,
}

impl WireCandidate {
    fn into_kind(self) -> Result<CandidateKind> {
        let onoff = self.onoff.filter(|s| !s.is_empty());
        let color = self.color.filter(|s| !s.is_empty());

        let directive_count =
            usize::from(onoff.is_some()) + usize::from(color.is_some()) + usize::from(self.scene.is_some());

        if let Some(special) = self.special {
            if self.light.is_some() || self.group.is_some() || directive_count > 0 {
                return Err(ConsoleError::Parse(
                    "special candidate must not carry a subject or directive".to_string(),
                ));
            }
            return Ok(CandidateKind::Special {
                message: special.message()?,
            });
        }

        let subject = match (self.light, self.group) {
            (Some(light), None) => Subject::Light {
                name: light.name("light")?,
            },
            (None, Some(group)) => Subject::Group {
                name: group.name("group")?,
            },
            (Some(_), Some(_)) => {
                return Err(ConsoleError::Parse(
                    "candidate has both a light and a group".to_string(),
                ))
            }
            (None, None) => {
                return Err(ConsoleError::Parse(
                    "candidate has neither a light, a group nor a special message".to_string(),
                ))
            }
        };

        if directive_count > 1 {
            return Err(ConsoleError::Parse(
                "candidate has more than one of onoff, color and scene".to_string(),
            ));
        }

        let directive = if let Some(value) = onoff {
            Some(Directive::Toggle(match value.as_str() {
                "on" => Toggle::On,
                "off" => Toggle::Off,
                other => {
                    return Err(ConsoleError::Parse(format!("unknown onoff value {other:?}")))
                }
            }))
        } else if let Some(color) = color {
            Some(Directive::Color(color))
        } else if let Some(scene) = self.scene {
            Some(Directive::Scene {
                name: scene.name("scene")?,
            })
        } else {
            None
        };

        Ok(CandidateKind::Action { subject, directive })
    }
}
