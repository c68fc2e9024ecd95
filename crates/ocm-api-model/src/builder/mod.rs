//! Builders are the mutable staging area API values are materialized from.
//!
//! Builders are typically generated using the [`#[derive(Builder)]`](`derive@Builder`) macro,
//! which creates a `<Type>Builder` with one chained setter per attribute. Building is recursive:
//! every nested builder is built as well and the first error stops the whole build.
//!
//! ```
//! use ocm_api_model::clustersmgmt::v1::{Aws, Cluster};
//!
//! let cluster = Cluster::builder()
//!     .name("my-cluster")
//!     .multi_az(false)
//!     .aws(Aws::builder().account_id("123456789012"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(cluster.name.as_deref(), Some("my-cluster"));
//! // Zero values are still present
//! assert_eq!(cluster.multi_az, Some(false));
//! // Attributes without a setter call are absent
//! assert_eq!(cluster.managed, None);
//! ```
use std::{
    collections::BTreeMap,
    fmt::{Debug, Display, Write},
};

use snafu::Snafu;
use tracing::debug;

pub use ocm_api_model_derive::Builder;

/// One step of the path from the root object to the attribute being built.
#[derive(Clone, Copy, Debug)]
enum Segment<'a> {
    Name(&'a str),
    Index(usize),
}

/// Contains context used for generating build errors
///
/// Constructed internally in [`build`]
pub struct BuildContext<'a> {
    segment: Segment<'a>,
    parent: Option<&'a BuildContext<'a>>,
}

impl<'a> BuildContext<'a> {
    fn root(name: &'a str) -> Self {
        Self {
            segment: Segment::Name(name),
            parent: None,
        }
    }

    /// Creates a `BuildContext` for an attribute (or map entry) of the current object
    pub fn field<'b>(&'b self, name: &'b str) -> BuildContext<'b> {
        BuildContext {
            segment: Segment::Name(name),
            parent: Some(self),
        }
    }

    /// Creates a `BuildContext` for an item of the current collection
    pub fn index(&self, index: usize) -> BuildContext<'_> {
        BuildContext {
            segment: Segment::Index(index),
            parent: Some(self),
        }
    }

    fn error_problem(&self, problem: BuildProblem) -> BuildError {
        let mut segments = Vec::new();
        let mut curr = Some(self);
        while let Some(curr_some) = curr {
            segments.push(match curr_some.segment {
                Segment::Name(name) => name.to_owned(),
                Segment::Index(index) => index.to_string(),
            });
            curr = curr_some.parent;
        }
        segments.reverse();
        BuildError {
            path: FieldPath { segments },
            problem,
        }
    }

    /// Returns an error indicating that the number being built is NaN or infinite
    pub fn error_non_finite(&self, value: f64) -> BuildError {
        self.error_problem(BuildProblem::NonFiniteNumber { value })
    }
}

#[derive(Clone, Debug, PartialEq)]
struct FieldPath {
    segments: Vec<String>,
}
impl Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_char('.')?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// An error that occurred when building an object.
///
/// It carries the path from the root object to the offending attribute, for example
/// `Cluster.node_pools.0.version`.
#[derive(Clone, Debug, PartialEq, Snafu)]
#[snafu(display("failed to build {path}"))]
pub struct BuildError {
    path: FieldPath,
    #[snafu(source)]
    problem: BuildProblem,
}

impl BuildError {
    /// The dot separated path to the attribute which failed to build.
    pub fn path(&self) -> String {
        self.path.to_string()
    }

    pub fn problem(&self) -> &BuildProblem {
        &self.problem
    }
}

/// A problem that was discovered during a build.
///
/// Only numbers can be invalid: JSON has no representation for NaN and infinities, so they could
/// never be written.
#[derive(Clone, Debug, PartialEq, Snafu)]
pub enum BuildProblem {
    #[snafu(display("{value} is not a finite number"))]
    NonFiniteNumber { value: f64 },
}

/// A type that can be materialized from a builder.
///
/// This will typically be derived using the [`Builder`] macro, rather than implemented manually.
pub trait Buildable: Sized {
    /// The builder type of `Self`.
    ///
    /// For [`Atomic`] types this is `Self`. For complex structs this is the `<Type>Builder`
    /// generated by [`Builder`].
    type Builder: Clone + Debug + PartialEq;

    /// Build `Self` from `builder`, recursively building every nested builder.
    ///
    /// `context` contains the path from the root object, used for error reporting. It is created
    /// by [`build`].
    fn from_builder(
        builder: &Self::Builder,
        context: &BuildContext<'_>,
    ) -> Result<Self, BuildError>;

    /// Creates a builder mirroring `self`, deep-copying nested values into nested builders.
    fn to_builder(&self) -> Self::Builder;
}

/// A marker trait for types that are built atomically (as one single value) rather than
/// through a builder of their own
pub trait Atomic: Clone + Debug + PartialEq {}
impl Atomic for String {}
impl Atomic for bool {}
impl Atomic for i32 {}
impl Atomic for i64 {}
impl Atomic for u32 {}
impl Atomic for u64 {}
impl Atomic for jiff::Timestamp {}

impl<T: Atomic> Buildable for T {
    type Builder = Self;

    fn from_builder(builder: &Self, _context: &BuildContext<'_>) -> Result<Self, BuildError> {
        Ok(builder.clone())
    }

    fn to_builder(&self) -> Self {
        self.clone()
    }
}

impl Buildable for f64 {
    type Builder = Self;

    fn from_builder(builder: &Self, context: &BuildContext<'_>) -> Result<Self, BuildError> {
        if builder.is_finite() {
            Ok(*builder)
        } else {
            Err(context.error_non_finite(*builder))
        }
    }

    fn to_builder(&self) -> Self {
        *self
    }
}

impl<T: Buildable> Buildable for Option<T> {
    type Builder = Option<T::Builder>;

    fn from_builder(
        builder: &Self::Builder,
        context: &BuildContext<'_>,
    ) -> Result<Self, BuildError> {
        builder
            .as_ref()
            .map(|builder| T::from_builder(builder, context))
            .transpose()
    }

    fn to_builder(&self) -> Self::Builder {
        self.as_ref().map(T::to_builder)
    }
}

impl<T: Buildable> Buildable for Vec<T> {
    type Builder = Vec<T::Builder>;

    fn from_builder(
        builder: &Self::Builder,
        context: &BuildContext<'_>,
    ) -> Result<Self, BuildError> {
        builder
            .iter()
            .enumerate()
            .map(|(index, builder)| T::from_builder(builder, &context.index(index)))
            .collect()
    }

    fn to_builder(&self) -> Self::Builder {
        self.iter().map(T::to_builder).collect()
    }
}

impl<T: Buildable> Buildable for BTreeMap<String, T> {
    type Builder = BTreeMap<String, T::Builder>;

    fn from_builder(
        builder: &Self::Builder,
        context: &BuildContext<'_>,
    ) -> Result<Self, BuildError> {
        builder
            .iter()
            .map(|(key, builder)| {
                let value = T::from_builder(builder, &context.field(key))?;
                Ok((key.clone(), value))
            })
            .collect()
    }

    fn to_builder(&self) -> Self::Builder {
        self.iter()
            .map(|(key, value)| (key.clone(), value.to_builder()))
            .collect()
    }
}

/// Builds a [`Buildable`] from its builder, naming the root of error paths `name`.
///
/// This is what the generated `build` methods call.
pub fn build<T: Buildable>(builder: &T::Builder, name: &str) -> Result<T, BuildError> {
    T::from_builder(builder, &BuildContext::root(name)).inspect_err(|error| {
        debug!(
            path = %error.path,
            problem = %error.problem,
            "failed to build object"
        );
    })
}
