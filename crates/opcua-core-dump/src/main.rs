//! Prints the static registries, or a namespace table loaded from JSON.
//!
//! Usage:
//!   opcua-core-dump [registries]
//!   opcua-core-dump namespaces <uris.json>
//!
//! `uris.json` holds an array of namespace URIs. Index 0 is always the OPC UA
//! base namespace regardless of the file content.

use std::error::Error;
use std::fs;

use log::{debug, info};
use serde::Serialize;

use opcua_core::{
    AttributeId, BuiltinDataType, BuiltinReferenceType, NamespaceTable, NodeClass, ReferenceType,
    VERSION, attribute,
};

#[derive(Serialize)]
struct BuiltinTypeEntry {
    id: u8,
    name: &'static str,
    node_id: String,
    backing_type: &'static str,
}

#[derive(Serialize)]
struct ReferenceTypeEntry {
    node_id: String,
    browse_name: String,
    inverse_name: Option<String>,
    symmetric: bool,
    is_abstract: bool,
    hierarchical: bool,
    super_type: Option<String>,
}

#[derive(Serialize)]
struct AttributeEntry {
    id: u32,
    name: &'static str,
}

#[derive(Serialize)]
struct NodeClassEntry {
    node_class: String,
    value: u32,
    attributes: Vec<&'static str>,
}

#[derive(Serialize)]
struct Registries {
    version: &'static str,
    builtin_types: Vec<BuiltinTypeEntry>,
    reference_types: Vec<ReferenceTypeEntry>,
    attributes: Vec<AttributeEntry>,
    node_classes: Vec<NodeClassEntry>,
}

#[derive(Serialize)]
struct NamespaceEntry {
    index: usize,
    uri: String,
}

fn collect_registries() -> Registries {
    let builtin_types = BuiltinDataType::ALL
        .iter()
        .map(|t| BuiltinTypeEntry {
            id: t.id(),
            name: t.name(),
            node_id: t.node_id().to_string(),
            backing_type: t.backing_type_name(),
        })
        .collect();

    let reference_types = BuiltinReferenceType::all()
        .map(|t| ReferenceTypeEntry {
            node_id: t.node_id().to_string(),
            browse_name: t.browse_name().name,
            inverse_name: t.inverse_name().map(str::to_string),
            symmetric: t.is_symmetric(),
            is_abstract: t.is_abstract(),
            hierarchical: t.is_hierarchical(),
            super_type: t.super_type().map(|s| s.name().to_string()),
        })
        .collect();

    let attributes = AttributeId::ALL
        .iter()
        .map(|a| AttributeEntry {
            id: a.id(),
            name: a.name(),
        })
        .collect();

    let node_classes = NodeClass::ALL
        .iter()
        .map(|&class| NodeClassEntry {
            node_class: format!("{:?}", class),
            value: class.value(),
            attributes: attribute::sorted_attributes(class)
                .into_iter()
                .map(AttributeId::name)
                .collect(),
        })
        .collect();

    Registries {
        version: VERSION,
        builtin_types,
        reference_types,
        attributes,
        node_classes,
    }
}

fn load_namespaces(path: &str) -> Result<Vec<NamespaceEntry>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let uris: Vec<String> = serde_json::from_str(&json)?;
    debug!("read {} uris from {}", uris.len(), path);

    let table = NamespaceTable::new();
    table.replace_all(uris);

    Ok(table
        .to_array()
        .into_iter()
        .enumerate()
        .map(|(index, uri)| NamespaceEntry { index, uri })
        .collect())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("registries");
    info!("opcua-core-dump {} running {:?}", VERSION, command);

    let output = match command {
        "registries" => serde_json::to_string_pretty(&collect_registries())?,
        "namespaces" => {
            let path = args
                .get(1)
                .ok_or("usage: opcua-core-dump namespaces <uris.json>")?;
            serde_json::to_string_pretty(&load_namespaces(path)?)?
        }
        other => {
            return Err(format!(
                "unknown command {:?}; expected \"registries\" or \"namespaces\"",
                other
            )
            .into());
        }
    };

    println!("{}", output);
    Ok(())
}
