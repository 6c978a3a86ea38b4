//! Edges and the closed set of edge payload kinds.
//!
//! A graph carries exactly one payload kind on all of its edges:
//!
//! | Kind | Payload type | Default when synthesized |
//! |------|--------------|--------------------------|
//! | plain | `()` | `()` |
//! | weighted | `f64` | `0.0` |
//! | labeled | `String` | `""` |
//! | data | `serde_json::Value` | `Value::Null` |
//!
//! [`EdgePayload`] is sealed; no fifth kind can be introduced downstream.

use core::fmt::Debug;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered `(source, target)` pair carrying a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V, P = ()> {
    /// Tail of the edge.
    pub source: V,
    /// Head of the edge.
    pub target: V,
    /// Weight, label, data or nothing.
    pub payload: P,
}

/// An edge with no payload.
pub type BaseEdge<V> = Edge<V, ()>;
/// An edge carrying a numeric weight.
pub type WeightedEdge<V> = Edge<V, f64>;
/// An edge carrying a string label.
pub type LabeledEdge<V> = Edge<V, String>;
/// An edge carrying an arbitrary JSON value.
pub type DataEdge<V> = Edge<V, Value>;

impl<V, P> Edge<V, P> {
    /// Creates an edge `source -> target` with `payload`.
    pub fn new(source: V, target: V, payload: P) -> Self {
        Self {
            source,
            target,
            payload,
        }
    }

    /// Tail of the edge.
    #[inline]
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Head of the edge.
    #[inline]
    pub fn target(&self) -> &V {
        &self.target
    }

    /// The payload.
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source == self.target
    }

    /// Swaps source and target.
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            payload: self.payload,
        }
    }

    /// Replaces the payload, keeping both endpoints.
    pub fn map_payload<Q>(self, f: impl FnOnce(P) -> Q) -> Edge<V, Q> {
        Edge {
            source: self.source,
            target: self.target,
            payload: f(self.payload),
        }
    }
}

impl<V> Edge<V, ()> {
    /// Creates an edge without payload.
    pub fn plain(source: V, target: V) -> Self {
        Self::new(source, target, ())
    }
}

impl<V> Edge<V, f64> {
    /// Creates a weighted edge.
    pub fn weighted(source: V, target: V, weight: f64) -> Self {
        Self::new(source, target, weight)
    }
}

impl<V> Edge<V, String> {
    /// Creates a labeled edge.
    pub fn labeled(source: V, target: V, label: impl Into<String>) -> Self {
        Self::new(source, target, label.into())
    }
}

impl<V> Edge<V, Value> {
    /// Creates an edge carrying arbitrary data.
    pub fn data(source: V, target: V, data: impl Into<Value>) -> Self {
        Self::new(source, target, data.into())
    }
}

/// Discriminant of the four payload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadKind {
    /// No payload.
    Plain,
    /// `f64` weight.
    Weighted,
    /// `String` label.
    Labeled,
    /// `serde_json::Value` data.
    Data,
}

/// A payload lifted into a single tagged variant, used by conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PayloadData {
    /// No payload.
    Plain,
    /// A weight.
    Weight(f64),
    /// A label.
    Label(String),
    /// Arbitrary data.
    Data(Value),
}

impl PayloadData {
    /// The kind this value belongs to.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Plain => PayloadKind::Plain,
            Self::Weight(_) => PayloadKind::Weighted,
            Self::Label(_) => PayloadKind::Labeled,
            Self::Data(_) => PayloadKind::Data,
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for serde_json::Value {}
}

/// One of the four edge payload types.
///
/// `from_data` copies a payload of the same kind verbatim and synthesizes
/// the kind's default for any other kind.
pub trait EdgePayload: sealed::Sealed + Clone + Debug {
    /// The kind implemented by this type.
    const KIND: PayloadKind;

    /// Lifts the payload into the tagged variant.
    fn into_data(self) -> PayloadData;

    /// Lowers a tagged payload into this kind.
    fn from_data(data: PayloadData) -> Self;
}

impl EdgePayload for () {
    const KIND: PayloadKind = PayloadKind::Plain;

    fn into_data(self) -> PayloadData {
        PayloadData::Plain
    }

    fn from_data(_data: PayloadData) -> Self {}
}

impl EdgePayload for f64 {
    const KIND: PayloadKind = PayloadKind::Weighted;

    fn into_data(self) -> PayloadData {
        PayloadData::Weight(self)
    }

    fn from_data(data: PayloadData) -> Self {
        match data {
            PayloadData::Weight(weight) => weight,
            _ => 0.0,
        }
    }
}

impl EdgePayload for String {
    const KIND: PayloadKind = PayloadKind::Labeled;

    fn into_data(self) -> PayloadData {
        PayloadData::Label(self)
    }

    fn from_data(data: PayloadData) -> Self {
        match data {
            PayloadData::Label(label) => label,
            _ => String::new(),
        }
    }
}

impl EdgePayload for Value {
    const KIND: PayloadKind = PayloadKind::Data;

    fn into_data(self) -> PayloadData {
        PayloadData::Data(self)
    }

    fn from_data(data: PayloadData) -> Self {
        match data {
            PayloadData::Data(value) => value,
            _ => Value::Null,
        }
    }
}
