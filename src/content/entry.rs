// src/content/entry.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// System metadata carried by entries, assets and links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sys {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "linkType", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Box<Link>>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub sys: Sys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    Entry,
    Asset,
}

impl Link {
    /// Reads a `{ "sys": { "type": "Link", ... } }` object out of a field value.
    pub fn from_value(value: &Value) -> Option<(LinkType, String)> {
        let sys = value.get("sys")?;
        if sys.get("type")?.as_str()? != "Link" {
            return None;
        }
        let link_type = match sys.get("linkType")?.as_str()? {
            "Entry" => LinkType::Entry,
            "Asset" => LinkType::Asset,
            _ => return None,
        };
        let id = sys.get("id")?.as_str()?.to_string();
        Some((link_type, id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub sys: Sys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Entry {
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    pub fn content_type_id(&self) -> Option<&str> {
        self.sys
            .content_type
            .as_ref()
            .map(|link| link.sys.id.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    /// Every link reachable from this entry's fields, in key order.
    pub fn links(&self) -> Vec<(LinkType, String)> {
        let mut links = Vec::new();
        for value in self.fields.values() {
            collect_links(value, &mut links);
        }
        links
    }
}

fn collect_links(value: &Value, links: &mut Vec<(LinkType, String)>) {
    if let Some(link) = Link::from_value(value) {
        links.push(link);
        return;
    }
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect_links(item, links)),
        Value::Object(map) => map.values().for_each(|item| collect_links(item, links)),
        _ => {}
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetFile {
    pub url: String,
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<AssetFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub sys: Sys,
    #[serde(default)]
    pub fields: AssetFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Includes {
    #[serde(rename = "Entry", default)]
    pub entries: Vec<Entry>,
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Asset>,
}

/// One page of query results plus the resolved reference table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntryCollection {
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub includes: Includes,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl EntryCollection {
    /// Looks an entry up among the items first, then the includes.
    pub fn find_entry(&self, id: &str) -> Option<&Entry> {
        self.items
            .iter()
            .chain(self.includes.entries.iter())
            .find(|entry| entry.sys.id == id)
    }

    pub fn find_asset(&self, id: &str) -> Option<&Asset> {
        self.includes.assets.iter().find(|asset| asset.sys.id == id)
    }

    pub fn first(&self) -> Option<&Entry> {
        self.items.first()
    }
}
