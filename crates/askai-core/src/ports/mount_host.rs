//! Mount host port - resolves where a widget should attach in the host UI.

use std::fmt;

/// Resolved attachment point handed out by a [`MountHost`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint {
    id: String,
}

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Where the caller asked to mount a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountTarget {
    /// Look the location up by identifier.
    Id(String),
    /// An already-resolved handle.
    Handle(MountPoint),
}

impl MountTarget {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Handle(point) => write!(f, "<handle {}>", point.id()),
        }
    }
}

/// Host UI lookup for mount targets.
pub trait MountHost {
    /// Resolve `target`, or `None` if it does not exist in the host.
    fn locate(&self, target: &MountTarget) -> Option<MountPoint>;
}
