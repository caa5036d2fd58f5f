//! Request-scoped access to the current session.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::session::Session;
use crate::store::SessionStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One session name or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionKeys {
    One(String),
    Many(Vec<String>),
}

impl SessionKeys {
    pub fn names(&self) -> &[String] {
        match self {
            SessionKeys::One(name) => std::slice::from_ref(name),
            SessionKeys::Many(names) => names,
        }
    }
}

impl From<&str> for SessionKeys {
    fn from(name: &str) -> Self {
        SessionKeys::One(name.to_string())
    }
}

impl From<String> for SessionKeys {
    fn from(name: String) -> Self {
        SessionKeys::One(name)
    }
}

impl From<Vec<String>> for SessionKeys {
    fn from(names: Vec<String>) -> Self {
        SessionKeys::Many(names)
    }
}

impl From<&[&str]> for SessionKeys {
    fn from(names: &[&str]) -> Self {
        SessionKeys::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SessionKeys {
    fn from(names: [&str; N]) -> Self {
        SessionKeys::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl TryFrom<&Value> for SessionKeys {
    type Error = SessionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let invalid =
            || SessionError::InvalidArgument("expected a string or an array of strings".into());

        match value {
            Value::String(name) => Ok(SessionKeys::One(name.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
                .collect::<Result<Vec<_>, _>>()
                .map(SessionKeys::Many),
            _ => Err(invalid()),
        }
    }
}

/// The session bound to the current request, if any.
///
/// Every data operation on an inactive context fails with
/// [`SessionError::Inactive`].
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    session: Option<Session>,
}

impl SessionContext {
    /// A context with no session.
    pub fn inactive() -> Self {
        Self { session: None }
    }

    pub fn new(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Resume `id` from `store`, or create a fresh session when it is unknown,
    /// expired, or not given.
    pub fn start(
        store: &(impl SessionStore + ?Sized),
        id: Option<&str>,
        config: &SessionConfig,
    ) -> SessionResult<Self> {
        if let Some(id) = id
            && let Some(mut session) = store.load(id)?
        {
            session.touch();
            swiss_log::debug!("resumed session {}", config.session_key(&session.id));
            return Ok(Self::new(session));
        }

        let session = store.create(Some(config.default_ttl))?;
        swiss_log::debug!("started session {}", config.session_key(&session.id));
        Ok(Self::new(session))
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id.as_str())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn active(&self) -> SessionResult<&Session> {
        self.session.as_ref().ok_or(SessionError::Inactive)
    }

    fn active_mut(&mut self) -> SessionResult<&mut Session> {
        self.session.as_mut().ok_or(SessionError::Inactive)
    }

    /// Value stored under `name`; `default` when it is absent or null.
    pub fn get(&self, name: &str, default: Value) -> SessionResult<Value> {
        Ok(match self.active()?.value(name) {
            Some(Value::Null) | None => default,
            Some(value) => value.clone(),
        })
    }

    /// Value under `name` deserialized into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> SessionResult<Option<T>> {
        match self.active()?.value(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| SessionError::Deserialization(e.to_string())),
        }
    }

    pub fn put<T: Serialize>(&mut self, name: &str, value: T) -> SessionResult<()> {
        self.active_mut()?.set(name, value)
    }

    /// Remove one name or several.
    pub fn forget(&mut self, keys: impl Into<SessionKeys>) -> SessionResult<()> {
        let keys = keys.into();
        let session = self.active_mut()?;
        for name in keys.names() {
            session.remove(name);
        }
        Ok(())
    }

    /// [`forget`](Self::forget) with names given as untyped JSON.
    pub fn forget_value(&mut self, keys: &Value) -> SessionResult<()> {
        self.active()?;
        let keys = SessionKeys::try_from(keys)?;
        self.forget(keys)
    }

    /// Every name is present with a non-null value.
    pub fn has(&self, keys: impl Into<SessionKeys>) -> SessionResult<bool> {
        let keys = keys.into();
        let session = self.active()?;
        Ok(keys
            .names()
            .iter()
            .all(|name| session.value(name).is_some_and(|v| !v.is_null())))
    }

    pub fn all(&self) -> SessionResult<&Map<String, Value>> {
        Ok(&self.active()?.data)
    }

    /// Write the session back to `store`.
    pub fn persist(&mut self, store: &(impl SessionStore + ?Sized)) -> SessionResult<()> {
        let session = self.active_mut()?;
        session.touch();
        store.save(session)
    }

    /// Clear the data, delete the session from `store` and deactivate.
    pub fn destroy(&mut self, store: &(impl SessionStore + ?Sized)) -> SessionResult<()> {
        let mut session = self.session.take().ok_or(SessionError::Inactive)?;
        session.clear();
        store.delete(&session.id)?;
        swiss_log::debug!("destroyed session {}", session.id);
        Ok(())
    }
}
