use crate::writer::StreamingPdfWriter;
use hromada_render_core::{ImageAsset, RenderError};
use lopdf::{Dictionary, ObjectId, dictionary};
use std::collections::HashMap;
use std::io::{Seek, Write};

/// An image XObject already written to the output.
#[derive(Debug, Clone)]
pub(crate) struct EmbeddedImage {
    pub resource_name: String,
    pub id: ObjectId,
    pub width: u32,
    pub height: u32,
}

impl EmbeddedImage {
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Decodes and embeds each named image once per document.
#[derive(Default)]
pub(crate) struct ImageRegistry {
    images: HashMap<String, EmbeddedImage>,
    order: Vec<String>,
}

impl ImageRegistry {
    pub fn get_or_embed<W: Write + Seek>(
        &mut self,
        writer: &mut StreamingPdfWriter<W>,
        asset: &ImageAsset,
    ) -> Result<EmbeddedImage, RenderError> {
        if let Some(image) = self.images.get(&asset.name) {
            return Ok(image.clone());
        }

        let decoded = image::load_from_memory(&asset.data).map_err(|e| RenderError::Image {
            name: asset.name.clone(),
            message: e.to_string(),
        })?;
        let (width, height) = (decoded.width(), decoded.height());

        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };

        if decoded.color().has_alpha() {
            let rgba = decoded.to_rgba8();
            let alpha: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
            let smask_id = writer.write_compressed_stream(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => width as i64,
                    "Height" => height as i64,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                },
                &alpha,
            )?;
            dict.set("SMask", smask_id);
        }

        let rgb = decoded.to_rgb8();
        let id = writer.write_compressed_stream(dict, rgb.as_raw())?;

        let embedded = EmbeddedImage {
            resource_name: format!("Im{}", self.order.len() + 1),
            id,
            width,
            height,
        };
        log::debug!(
            "Embedded image '{}' ({}x{}) as /{}",
            asset.name,
            width,
            height,
            embedded.resource_name
        );
        self.images.insert(asset.name.clone(), embedded.clone());
        self.order.push(asset.name.clone());
        Ok(embedded)
    }

    /// The `/XObject` resource dictionary for every embedded image.
    pub fn resource_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        for name in &self.order {
            if let Some(image) = self.images.get(name) {
                dict.set(image.resource_name.as_bytes(), image.id);
            }
        }
        dict
    }
}
