use serde::{Deserialize, Serialize};

/// Bullet mask displayed in place of sensitive field values (passwords,
/// security codes, TOTP seeds) while the field is in its hidden state.
pub const SECRETS_MASK: &str = "••••••••";

/// Named icons a field row can carry. Serialized kebab-case so the set maps
/// one-to-one onto the icon names a rendering frontend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    PersonCircle,
    Clock,
    Person,
    Building,
    Fingerprint,
    Airplane,
    CreditCard,
    Envelope,
    Phone,
    Map,
    Calendar,
    Lock,
    Key,
    Document,
    CheckCircle,
    Circle,
    Eye,
    EyeDisabled,
}

/// Trailing accessory (icon and/or text) appended to a field row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<Icon>,
}

/// Attributes common to every field variant.
///
/// `id` is stable across rebuilds and unique within one item's output; it is
/// namespaced by origin (`login.username`, `card.number`, `custom.0.Name`,
/// `notes`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBody {
    pub id: String,
    /// Row title, e.g. "Username", "Password"
    pub label: String,
    /// The raw, true value
    pub value: String,
    /// Shown in place of `value` in row subtitles when they differ
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_value: Option<String>,
    /// Clipboard payload override; effective payload falls back to
    /// `display_value`, then `value`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub copy_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub accessories: Vec<Accessory>,
}

impl FieldBody {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        FieldBody {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            display_value: None,
            copy_value: None,
            icon: None,
            accessories: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_display_value(mut self, display_value: impl Into<String>) -> Self {
        self.display_value = Some(display_value.into());
        self
    }
}

/// One display field, discriminated on the `type` tag.
///
/// The variant tells the rendering collaborator which actions apply:
/// text fields copy/paste, links also open in the browser, hidden fields
/// start masked behind a reveal toggle, and totp fields stand for a seed
/// whose rolling code is computed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemField {
    Text {
        #[serde(flatten)]
        body: FieldBody,
    },
    Link {
        #[serde(flatten)]
        body: FieldBody,
    },
    #[serde(rename_all = "camelCase")]
    Hidden {
        #[serde(flatten)]
        body: FieldBody,
        /// Icon while the value is revealed
        showing_icon: Icon,
        /// Icon while the value is masked (the initial state)
        hidden_icon: Icon,
    },
    #[serde(rename_all = "camelCase")]
    Totp {
        #[serde(flatten)]
        body: FieldBody,
        /// Label used for actions on the raw seed, as opposed to the
        /// computed code (e.g. "TOTP Secret")
        secret_label: String,
    },
}

impl ItemField {
    pub fn text(body: FieldBody) -> Self {
        ItemField::Text { body }
    }

    pub fn link(body: FieldBody) -> Self {
        ItemField::Link { body }
    }

    /// Hidden field with the default reveal-toggle icons
    pub fn hidden(body: FieldBody) -> Self {
        ItemField::Hidden {
            body,
            showing_icon: Icon::Eye,
            hidden_icon: Icon::EyeDisabled,
        }
    }

    pub fn totp(body: FieldBody, secret_label: impl Into<String>) -> Self {
        ItemField::Totp {
            body,
            secret_label: secret_label.into(),
        }
    }

    pub fn body(&self) -> &FieldBody {
        match self {
            ItemField::Text { body }
            | ItemField::Link { body }
            | ItemField::Hidden { body, .. }
            | ItemField::Totp { body, .. } => body,
        }
    }

    pub fn id(&self) -> &str {
        &self.body().id
    }

    pub fn label(&self) -> &str {
        &self.body().label
    }

    /// Whether the value defaults to a masked display state
    pub fn is_sensitive(&self) -> bool {
        matches!(self, ItemField::Hidden { .. } | ItemField::Totp { .. })
    }

    /// The clipboard payload: `copy_value`, else `display_value`, else the
    /// raw value.
    pub fn copy_text(&self) -> &str {
        let body = self.body();
        body.copy_value
            .as_deref()
            .or(body.display_value.as_deref())
            .unwrap_or(&body.value)
    }

    /// The text shown in a row subtitle: `display_value`, else the raw value.
    pub fn display_text(&self) -> &str {
        let body = self.body();
        body.display_value.as_deref().unwrap_or(&body.value)
    }
}

/// A titled, ordered group of fields. Builders never produce a section with
/// zero fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSection {
    pub title: String,
    pub fields: Vec<ItemField>,
}

impl FieldSection {
    pub fn new(title: impl Into<String>, fields: Vec<ItemField>) -> Self {
        FieldSection {
            title: title.into(),
            fields,
        }
    }
}
