//! Process-wide registry mapping a kind to the Rust type that represents it.
//!
//! Nothing is registered at load time. Call [`register_types`] once during
//! startup, before any lookup through [`scheme`].

mod object;

pub use object::*;

use std::{collections::HashMap, fmt};

use kube::core::{GroupVersion, GroupVersionKind, Resource};
use once_cell::sync::OnceCell;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{
    apis::apigatewayv2,
    error::{Error, Result},
    logger,
};

type NewFn = fn() -> Box<dyn SchemeObject>;
type DecodeFn = fn(JsonValue) -> serde_json::Result<Box<dyn SchemeObject>>;

/// Descriptor of a registered kind.
#[derive(Clone)]
pub struct KnownType {
    gvk: GroupVersionKind,
    plural: Option<String>,
    type_name: &'static str,
    new: NewFn,
    decode: DecodeFn,
}

impl KnownType {
    pub fn gvk(&self) -> &GroupVersionKind {
        &self.gvk
    }

    pub fn api_version(&self) -> String {
        api_version(&self.gvk)
    }

    /// `None` for list kinds.
    pub fn plural(&self) -> Option<&str> {
        self.plural.as_deref()
    }

    pub fn is_list(&self) -> bool {
        self.plural.is_none()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for KnownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnownType")
            .field("gvk", &self.gvk)
            .field("plural", &self.plural)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl fmt::Display for KnownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.gvk.kind)
    }
}

#[derive(Debug, Default)]
pub struct Scheme {
    types: HashMap<GroupVersionKind, KnownType>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource kind under the identity its `kube::Resource`
    /// implementation reports.
    pub fn add_known_type<K>(&mut self) -> Result<()>
    where
        K: Resource<DynamicType = ()> + Serialize + DeserializeOwned,
        K: Default + fmt::Debug + Send + Sync + 'static,
    {
        let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()));

        self.insert(KnownType {
            gvk,
            plural: Some(K::plural(&()).into_owned()),
            type_name: std::any::type_name::<K>(),
            new: new_object::<K>,
            decode: decode_object::<K>,
        })
    }

    /// Registers `L` as the `<Kind>List` of the resource kind `K`.
    pub fn add_known_list_type<L, K>(&mut self) -> Result<()>
    where
        L: Serialize + DeserializeOwned + Default + fmt::Debug + Send + Sync + 'static,
        K: Resource<DynamicType = ()>,
    {
        let kind = format!("{}List", K::kind(&()));
        let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &kind);

        self.insert(KnownType {
            gvk,
            plural: None,
            type_name: std::any::type_name::<L>(),
            new: new_object::<L>,
            decode: decode_object::<L>,
        })
    }

    fn insert(&mut self, known: KnownType) -> Result<()> {
        if let Some(existing) = self.types.get(&known.gvk) {
            return Err(Error::AlreadyRegistered(format!(
                "{} is already registered as {}",
                known,
                existing.type_name()
            )));
        }

        logger!(debug, "register {} as {}", known, known.type_name());

        self.types.insert(known.gvk.clone(), known);

        Ok(())
    }

    pub fn recognizes(&self, gvk: &GroupVersionKind) -> bool {
        self.types.contains_key(gvk)
    }

    pub fn known_type(&self, gvk: &GroupVersionKind) -> Option<&KnownType> {
        self.types.get(gvk)
    }

    /// Every registered type sorted by group, version and kind.
    pub fn known_types(&self) -> Vec<&KnownType> {
        let mut types: Vec<_> = self.types.values().collect();

        types.sort_by(|a, b| {
            (&a.gvk.group, &a.gvk.version, &a.gvk.kind).cmp(&(
                &b.gvk.group,
                &b.gvk.version,
                &b.gvk.kind,
            ))
        });

        types
    }

    /// Kind names registered for one group version, sorted.
    pub fn known_kinds(&self, gv: &GroupVersion) -> Vec<&str> {
        let mut kinds: Vec<_> = self
            .types
            .keys()
            .filter(|gvk| gvk.group == gv.group && gvk.version == gv.version)
            .map(|gvk| gvk.kind.as_str())
            .collect();

        kinds.sort_unstable();

        kinds
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Default value of a registered kind.
    pub fn new_object(&self, gvk: &GroupVersionKind) -> Result<Object> {
        let known = self.lookup(gvk)?;

        Ok(Object::new(gvk.clone(), (known.new)()))
    }

    /// Deserializes into the Rust type registered for the value's
    /// `apiVersion` and `kind`.
    ///
    /// A resource kind with no `metadata` or `spec` (or `null` ones) decodes
    /// as if both were empty objects.
    pub fn decode(&self, mut value: JsonValue) -> Result<Object> {
        let gvk = group_version_kind_of(&value)?;

        let known = self.lookup(&gvk)?;

        if !known.is_list() {
            default_empty_fields(&mut value, &["metadata", "spec"]);
        }

        let inner = (known.decode)(value)?;

        Ok(Object::new(gvk, inner))
    }

    /// Decodes every non-empty document of a YAML stream.
    pub fn decode_yaml(&self, input: &str) -> Result<Vec<Object>> {
        let mut objects = Vec::new();

        for document in serde_yaml::Deserializer::from_str(input) {
            let value = JsonValue::deserialize(document)?;

            if value.is_null() {
                continue;
            }

            objects.push(self.decode(value)?);
        }

        Ok(objects)
    }

    /// Serializes an object, stamping `apiVersion` and `kind` from its
    /// registered identity.
    pub fn encode(&self, object: &Object) -> Result<JsonValue> {
        let known = self.lookup(object.gvk())?;

        let mut value = object.to_value()?;

        if let JsonValue::Object(map) = &mut value {
            map.insert("apiVersion".into(), known.api_version().into());
            map.insert("kind".into(), known.gvk.kind.clone().into());
        }

        Ok(value)
    }

    fn lookup(&self, gvk: &GroupVersionKind) -> Result<&KnownType> {
        self.known_type(gvk).ok_or_else(|| {
            Error::NotRegistered(format!("{}, Kind={}", api_version(gvk), gvk.kind))
        })
    }
}

fn new_object<K>() -> Box<dyn SchemeObject>
where
    K: Serialize + Default + fmt::Debug + Send + Sync + 'static,
{
    Box::new(K::default())
}

fn decode_object<K>(value: JsonValue) -> serde_json::Result<Box<dyn SchemeObject>>
where
    K: Serialize + DeserializeOwned + fmt::Debug + Send + Sync + 'static,
{
    let object: K = serde_json::from_value(value)?;

    Ok(Box::new(object))
}

fn default_empty_fields(value: &mut JsonValue, keys: &[&str]) {
    let JsonValue::Object(map) = value else {
        return;
    };

    for key in keys {
        let field = map
            .entry(*key)
            .or_insert_with(|| JsonValue::Object(Default::default()));

        if field.is_null() {
            *field = JsonValue::Object(Default::default());
        }
    }
}

fn api_version(gvk: &GroupVersionKind) -> String {
    if gvk.group.is_empty() {
        gvk.version.to_string()
    } else {
        format!("{}/{}", gvk.group, gvk.version)
    }
}

fn group_version_kind_of(value: &JsonValue) -> Result<GroupVersionKind> {
    let api_version = value
        .get("apiVersion")
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingTypeMeta("apiVersion"))?;

    let kind = value
        .get("kind")
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingTypeMeta("kind"))?;

    let (group, version) = match api_version.split_once('/') {
        None => ("", api_version),
        Some((group, version))
            if !group.is_empty() && !version.is_empty() && !version.contains('/') =>
        {
            (group, version)
        }
        Some(_) => return Err(Error::InvalidApiVersion(api_version.to_string())),
    };

    Ok(GroupVersionKind::gvk(group, version, kind))
}

/// Ordered list of registration functions, applied in the order they were
/// registered.
#[derive(Clone, Default)]
pub struct SchemeBuilder {
    funcs: Vec<fn(&mut Scheme) -> Result<()>>,
}

impl SchemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, func: fn(&mut Scheme) -> Result<()>) -> Self {
        self.funcs.push(func);
        self
    }

    pub fn add_to_scheme(&self, scheme: &mut Scheme) -> Result<()> {
        self.funcs.iter().try_for_each(|func| func(scheme))
    }

    pub fn build(&self) -> Result<Scheme> {
        let mut scheme = Scheme::new();

        self.add_to_scheme(&mut scheme)?;

        Ok(scheme)
    }
}

impl fmt::Debug for SchemeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeBuilder")
            .field("funcs", &self.funcs.len())
            .finish()
    }
}

static SCHEME: OnceCell<Scheme> = OnceCell::new();

/// Builds the process-wide scheme with every group version this crate
/// declares. Only the first call registers; later calls return the same
/// scheme.
pub fn register_types() -> Result<&'static Scheme> {
    SCHEME.get_or_try_init(|| {
        let scheme = apigatewayv2::v1alpha1::scheme_builder().build()?;

        logger!(info, "scheme initialized with {} types", scheme.len());

        Ok(scheme)
    })
}

/// `None` until [`register_types`] has run.
pub fn scheme() -> Option<&'static Scheme> {
    SCHEME.get()
}
