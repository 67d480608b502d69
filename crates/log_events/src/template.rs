use std::fmt;

/// How a placeholder asks for its property to be captured.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Destructuring {
    #[default]
    Default,
    /// `{$name}`: capture the property as a string.
    Stringify,
    /// `{@name}`: capture the property's structure.
    Destructure,
}

/// A named placeholder inside a message template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyToken {
    /// The token's exact template text, braces included.
    pub raw: String,
    pub property_name: String,
    /// Format specifier following `:`, if any.
    pub format: Option<String>,
    pub destructuring: Destructuring,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageTemplateToken {
    Text(String),
    Property(PropertyToken),
}

/// A message template: ordered literal-text and placeholder tokens.
///
/// Recognized placeholder shapes are `{name}`, `{name:format}`, `{@name}`
/// and `{$name}`, where `name` is one or more ASCII alphanumeric or `_`
/// characters. `{{` and `}}` are literal braces. Anything else is kept as
/// literal text, so parsing never fails.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MessageTemplate {
    text: String,
    tokens: Vec<MessageTemplateToken>,
}

impl MessageTemplate {
    /// A template with no tokens at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'{' if bytes.get(i + 1) == Some(&b'{') => {
                    literal.push('{');
                    i += 2;
                }
                b'}' if bytes.get(i + 1) == Some(&b'}') => {
                    literal.push('}');
                    i += 2;
                }
                b'{' => match leading_property_token(&text[i..]) {
                    Some((token, len)) => {
                        if !literal.is_empty() {
                            tokens.push(MessageTemplateToken::Text(std::mem::take(&mut literal)));
                        }
                        tokens.push(MessageTemplateToken::Property(token));
                        i += len;
                    }
                    None => {
                        literal.push('{');
                        i += 1;
                    }
                },
                _ => {
                    let Some(ch) = text[i..].chars().next() else {
                        break;
                    };
                    literal.push(ch);
                    i += ch.len_utf8();
                }
            }
        }

        if !literal.is_empty() {
            tokens.push(MessageTemplateToken::Text(literal));
        }

        Self {
            text: text.to_string(),
            tokens,
        }
    }

    /// Builds an all-literal template from a plain message by escaping both
    /// brace characters, so placeholder-looking substrings stay literal.
    pub fn from_message(message: &str) -> Self {
        let mut escaped = String::with_capacity(message.len());
        for ch in message.chars() {
            match ch {
                '{' => escaped.push_str("{{"),
                '}' => escaped.push_str("}}"),
                other => escaped.push(other),
            }
        }
        Self::parse(&escaped)
    }

    /// The template text the tokens were parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[MessageTemplateToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The placeholder tokens, in template order.
    pub fn property_tokens(&self) -> impl Iterator<Item = &PropertyToken> {
        self.tokens.iter().filter_map(|token| match token {
            MessageTemplateToken::Property(property) => Some(property),
            MessageTemplateToken::Text(_) => None,
        })
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tries to read one placeholder at the start of `rest` (which begins with a
/// `{` that is not an escape). Returns the token and its byte length.
fn leading_property_token(rest: &str) -> Option<(PropertyToken, usize)> {
    let close = rest.find('}')?;
    let body = &rest[1..close];
    if body.contains('{') {
        return None;
    }

    let (destructuring, named) = match body.strip_prefix('@') {
        Some(named) => (Destructuring::Destructure, named),
        None => match body.strip_prefix('$') {
            Some(named) => (Destructuring::Stringify, named),
            None => (Destructuring::Default, body),
        },
    };

    let (name, format) = match named.split_once(':') {
        Some((name, format)) => (name, Some(format)),
        None => (named, None),
    };

    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }

    let token = PropertyToken {
        raw: rest[..=close].to_string(),
        property_name: name.to_string(),
        format: format.map(str::to_string),
        destructuring,
    };
    Some((token, close + 1))
}
