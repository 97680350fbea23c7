use std::{any::Any, fmt};

use kube::core::GroupVersionKind;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Type-erased value of a registered kind.
pub trait SchemeObject: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn to_value(&self) -> serde_json::Result<JsonValue>;
}

impl<T> SchemeObject for T
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn to_value(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(self)
    }
}

/// A decoded object together with the identity it was registered under.
#[derive(Debug)]
pub struct Object {
    gvk: GroupVersionKind,
    inner: Box<dyn SchemeObject>,
}

impl Object {
    pub(super) fn new(gvk: GroupVersionKind, inner: Box<dyn SchemeObject>) -> Self {
        Self { gvk, inner }
    }

    pub fn gvk(&self) -> &GroupVersionKind {
        &self.gvk
    }

    pub fn is<K: Any>(&self) -> bool {
        self.inner.as_any().is::<K>()
    }

    pub fn downcast_ref<K: Any>(&self) -> Option<&K> {
        self.inner.as_any().downcast_ref()
    }

    pub fn downcast_mut<K: Any>(&mut self) -> Option<&mut K> {
        self.inner.as_any_mut().downcast_mut()
    }

    pub fn downcast<K: Any>(self) -> Option<K> {
        self.inner.into_any().downcast().ok().map(|k| *k)
    }

    pub fn to_value(&self) -> serde_json::Result<JsonValue> {
        self.inner.to_value()
    }
}
