//! Port table model
//! Static per-tab port descriptors built once at startup

use crate::constants::{PLACEHOLDER_VALUE, PORTS_SAMPLE};
use crate::types::TabLabel;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Value shown in the Read Value and Default columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(f64),
    Text(String),
}

impl PortValue {
    pub fn placeholder() -> Self {
        PortValue::Text(PLACEHOLDER_VALUE.to_string())
    }
}

impl Default for PortValue {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for PortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortValue::Text(s) => f.write_str(s),
            PortValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for PortValue {
    fn from(s: &str) -> Self {
        PortValue::Text(s.to_string())
    }
}

impl From<f64> for PortValue {
    fn from(n: f64) -> Self {
        PortValue::Number(n)
    }
}

/// A named analog signal line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    #[serde(default)]
    pub default: PortValue,
}

impl Port {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), default: PortValue::placeholder() }
    }

    // Drivers and tests attach numeric defaults; the sample tables keep placeholders
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_default(mut self, default: impl Into<PortValue>) -> Self {
        self.default = default.into();
        self
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PortTableError {
    #[error("duplicate port name: {0}")]
    DuplicateName(String),
}

/// Ordered, read-only list of ports for one tab
#[derive(Debug, Clone, Default)]
pub struct PortTable {
    ports: Vec<Port>,
}

impl PortTable {
    pub fn new(ports: Vec<Port>) -> Result<Self, PortTableError> {
        let mut seen = HashSet::new();
        for port in &ports {
            if !seen.insert(port.name.as_str()) {
                return Err(PortTableError::DuplicateName(port.name.clone()));
            }
        }
        Ok(Self { ports })
    }

    /// Table with placeholder defaults for each name
    pub fn from_names(names: &[&str]) -> Result<Self, PortTableError> {
        Self::new(names.iter().map(|n| Port::new(*n)).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }
}

/// Sample tables for all five tabs
pub fn sample_tables() -> Vec<(TabLabel, PortTable)> {
    TabLabel::ALL
        .iter()
        .map(|&tab| {
            // PORTS_SAMPLE is a fixed list of distinct names
            let table = PortTable::from_names(PORTS_SAMPLE).unwrap_or_default();
            debug!(tab = %tab, ports = table.len(), "Built port table");
            (tab, table)
        })
        .collect()
}
