#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use gltfvis::Asset;
use gltfvis::model::Document;
use gltfvis::parser::glb::write_glb;

/// Builds a single-buffer asset in memory: every pushed array becomes one
/// buffer view plus one accessor.
#[derive(Default)]
pub struct AssetBuilder {
    pub bin: Vec<u8>,
    views: Vec<Value>,
    accessors: Vec<Value>,
}

impl AssetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&mut self, bytes: &[u8]) -> usize {
        while self.bin.len() % 4 != 0 {
            self.bin.push(0);
        }
        let offset = self.bin.len();
        self.bin.extend_from_slice(bytes);
        self.views.push(json!({
            "buffer": 0,
            "byteOffset": offset,
            "byteLength": bytes.len(),
        }));
        self.views.len() - 1
    }

    /// Push a raw accessor record.
    pub fn accessor(&mut self, accessor: Value) -> usize {
        self.accessors.push(accessor);
        self.accessors.len() - 1
    }

    pub fn floats(&mut self, values: &[f32], shape: &str) -> usize {
        let components = match shape {
            "SCALAR" => 1,
            "VEC2" => 2,
            "VEC3" => 3,
            "VEC4" => 4,
            other => panic!("unsupported shape {other}"),
        };
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let view = self.view(&bytes);
        self.accessor(json!({
            "bufferView": view,
            "componentType": 5126,
            "count": values.len() / components,
            "type": shape,
        }))
    }

    pub fn u16s(&mut self, values: &[u16]) -> usize {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let view = self.view(&bytes);
        self.accessor(json!({
            "bufferView": view,
            "componentType": 5123,
            "count": values.len(),
            "type": "SCALAR",
        }))
    }

    pub fn u8s(&mut self, values: &[u8]) -> usize {
        let view = self.view(values);
        self.accessor(json!({
            "bufferView": view,
            "componentType": 5121,
            "count": values.len(),
            "type": "SCALAR",
        }))
    }

    /// The document JSON; keys of `extra` (meshes, animations, ...) are merged in.
    pub fn document(&self, extra: Value) -> Value {
        let mut doc = json!({
            "asset": { "version": "2.0" },
            "buffers": [{ "byteLength": self.bin.len() }],
            "bufferViews": self.views,
            "accessors": self.accessors,
        });
        if let (Some(doc), Value::Object(extra)) = (doc.as_object_mut(), extra) {
            for (key, value) in extra {
                doc.insert(key, value);
            }
        }
        doc
    }

    pub fn asset(&self, extra: Value) -> Asset {
        let document: Document = serde_json::from_value(self.document(extra)).unwrap();
        Asset::new(document, vec![self.bin.clone()])
    }

    /// `.gltf` bytes with the buffer embedded as a base64 data URI.
    pub fn gltf_with_data_uri(&self, extra: Value) -> Vec<u8> {
        let mut doc = self.document(extra);
        doc["buffers"][0]["uri"] = json!(format!(
            "data:application/octet-stream;base64,{}",
            STANDARD.encode(&self.bin)
        ));
        serde_json::to_vec(&doc).unwrap()
    }

    /// `.gltf` bytes referencing the buffer as an external file.
    pub fn gltf_with_file_uri(&self, extra: Value, uri: &str) -> Vec<u8> {
        let mut doc = self.document(extra);
        doc["buffers"][0]["uri"] = json!(uri);
        serde_json::to_vec(&doc).unwrap()
    }

    pub fn glb(&self, extra: Value) -> Vec<u8> {
        let json = serde_json::to_vec(&self.document(extra)).unwrap();
        write_glb(&json, Some(&self.bin)).unwrap()
    }
}

/// One triangle: positions, normals and u16 indices, under mesh 0.
pub fn triangle(builder: &mut AssetBuilder) -> Value {
    let positions = builder.floats(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        "VEC3",
    );
    let normals = builder.floats(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0], "VEC3");
    let indices = builder.u16s(&[0, 1, 2]);
    json!({
        "attributes": { "POSITION": positions, "NORMAL": normals },
        "indices": indices,
        "material": 0,
    })
}

/// A translation clip on node 0 moving along X from 0 to `distance` over `duration` seconds.
pub fn slide(builder: &mut AssetBuilder, duration: f32, distance: f32) -> Value {
    let input = builder.floats(&[0.0, duration], "SCALAR");
    let output = builder.floats(&[0.0, 0.0, 0.0, distance, 0.0, 0.0], "VEC3");
    json!({
        "name": "slide",
        "samplers": [{ "input": input, "output": output, "interpolation": "LINEAR" }],
        "channels": [{ "sampler": 0, "target": { "node": 0, "path": "translation" } }],
    })
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
