//! Element -> element attribute -> global attribute lookup cascade
use htmlcompat_core::{CompatError, FeatureKey};
use htmlcompat_data::{CompatStatement, FeatureDatabase};

/// Where the deciding record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordOrigin {
    Element,
    ElementAttribute,
    GlobalAttribute,
    Missing,
}

pub(crate) struct Lookup<'db> {
    pub feature: FeatureKey,
    pub compat: Option<&'db CompatStatement>,
    pub origin: RecordOrigin,
}

pub(crate) fn element<'db>(db: &'db FeatureDatabase, element: &str) -> Result<Lookup<'db>, CompatError> {
    let feature = FeatureKey::for_element(element)?;
    let compat = feature.element().and_then(|name| db.element(name));
    let origin = if compat.is_some() {
        RecordOrigin::Element
    } else {
        RecordOrigin::Missing
    };
    Ok(Lookup { feature, compat, origin })
}

/// Element-scoped record first, then the global attribute table. When both
/// miss, the key stays element-scoped and `compat` is `None`.
pub(crate) fn attribute<'db>(
    db: &'db FeatureDatabase,
    element: &str,
    attribute: &str,
) -> Result<Lookup<'db>, CompatError> {
    let scoped = FeatureKey::for_element_attribute(element, attribute)?;
    let (element, attribute) = match (scoped.element(), scoped.attribute()) {
        (Some(e), Some(a)) => (e, a),
        _ => return Err(CompatError::InvalidFeatureKey(scoped.path())),
    };

    if let Some(compat) = db.element_attribute(element, attribute) {
        return Ok(Lookup {
            feature: scoped,
            compat: Some(compat),
            origin: RecordOrigin::ElementAttribute,
        });
    }

    if let Some(compat) = db.global_attribute(attribute) {
        return Ok(Lookup {
            feature: FeatureKey::for_global_attribute(attribute)?,
            compat: Some(compat),
            origin: RecordOrigin::GlobalAttribute,
        });
    }

    Ok(Lookup {
        feature: scoped,
        compat: None,
        origin: RecordOrigin::Missing,
    })
}
