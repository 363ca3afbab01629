//! Scalar swap policy: whether and how a scalar crosses byte order.
//!
//! This is the single decision point for endianness handling. The two
//! directions must stay symmetric: composing them is the identity whenever
//! the scalar's transform pair is a true inverse pair.

use crate::{CodegenError, CodegenResult};
use jnigen_model::{Field, ScalarType};

/// The declared host-to-net transform of a scalar.
///
/// Fails with a MissingSubstitution-class error when the scalar claims a
/// transform but names none (a malformed descriptor surfaces here, before
/// any fragment is appended).
pub(crate) fn host_to_net_fn<'a>(scalar: &'a ScalarType, context: &str) -> CodegenResult<&'a str> {
    scalar
        .host_to_net_fn
        .as_deref()
        .ok_or_else(|| missing(context, "host_to_net_fn"))
}

/// The declared net-to-host transform of a scalar. See [`host_to_net_fn`].
pub(crate) fn net_to_host_fn<'a>(scalar: &'a ScalarType, context: &str) -> CodegenResult<&'a str> {
    scalar
        .net_to_host_fn
        .as_deref()
        .ok_or_else(|| missing(context, "net_to_host_fn"))
}

fn missing(context: &str, placeholder: &str) -> CodegenError {
    CodegenError::MissingSubstitution {
        context: context.to_string(),
        placeholder: placeholder.to_string(),
    }
}

/// Managed-to-wire swap expression for an enum value field:
/// `*_net = fn(value)`, or a direct assignment when no transform is needed.
pub(crate) fn scalar_host_to_net_swap(field: &Field, owner: &str) -> CodegenResult<String> {
    let scalar = enum_scalar(field, owner)?;
    if scalar.swap_needed {
        let f = host_to_net_fn(scalar, &swap_context(owner, field))?;
        Ok(format!("*_net = {}({})", f, field.name))
    } else {
        Ok(format!("*_net = {}", field.name))
    }
}

/// Wire-to-managed swap expression for an enum value field:
/// `fn((type) _net)`, or the wire value passed through unchanged.
pub(crate) fn scalar_net_to_host_swap(field: &Field, owner: &str) -> CodegenResult<String> {
    let scalar = enum_scalar(field, owner)?;
    if scalar.swap_needed {
        let f = net_to_host_fn(scalar, &swap_context(owner, field))?;
        Ok(format!("{}(({}) _net)", f, scalar.name))
    } else {
        Ok("_net".to_string())
    }
}

fn enum_scalar<'a>(field: &'a Field, owner: &str) -> CodegenResult<&'a ScalarType> {
    field
        .ty
        .scalar()
        .ok_or_else(|| CodegenError::NonScalarEnumValue(owner.to_string()))
}

fn swap_context(owner: &str, field: &Field) -> String {
    format!("scalar swap for `{}.{}`", owner, field.name)
}
