use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::io::{self, Seek, Write};

/// Writes indirect objects straight to the output as they are produced.
///
/// Object ids for the page tree and catalog are reserved up front so page
/// dictionaries can point at their parent before it exists.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    xref: Xref,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        Ok(Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 2,
            pages_id: (1, 0),
            catalog_id: (2, 0),
            page_ids: Vec::new(),
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Allocates an id and writes `object` under it.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        self.write_object_at_id(id, &object)?;
        Ok(id)
    }

    pub fn write_object_at_id(&mut self, id: ObjectId, object: &Object) -> io::Result<()> {
        if id.0 > self.max_id {
            self.max_id = id.0;
        }
        internal_writer::write_indirect_object(&mut self.writer, id, object, &mut self.xref)
    }

    /// Writes `data` as a FlateDecode stream with the given dictionary entries.
    pub fn write_compressed_stream(&mut self, dict: Dictionary, data: &[u8]) -> io::Result<ObjectId> {
        let compressed = deflate(data)?;
        let mut dict = dict;
        dict.set("Filter", "FlateDecode");
        self.write_object(Object::Stream(Stream::new(dict, compressed)))
    }

    /// Writes a page content stream uncompressed so the painted operators
    /// stay readable in the output.
    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, lopdf::Error> {
        let stream = Stream::new(Dictionary::new(), content.encode()?);
        Ok(self.write_object(Object::Stream(stream))?)
    }

    pub fn add_page(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self, info: Option<Dictionary>) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.write_object_at_id(self.pages_id, &pages_dict.into())?;

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.write_object_at_id(self.catalog_id, &catalog_dict.into())?;

        let info_id = match info {
            Some(info) => Some(self.write_object(info.into())?),
            None => None,
        };

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.xref)?;

        let mut trailer = dictionary! { "Size" => self.xref.size as i64, "Root" => self.catalog_id };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

pub(crate) fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

mod internal_writer {
    use super::*;
    use lopdf::StringFormat;
    use std::collections::BTreeMap;

    pub fn write_indirect_object<W: Write + Seek>(
        writer: &mut W,
        id: ObjectId,
        object: &Object,
        xref: &mut Xref,
    ) -> io::Result<()> {
        let offset = writer.stream_position()?;
        xref.insert(
            id.0,
            XrefEntry::Normal {
                offset: offset as u32,
                generation: id.1,
            },
        );
        writeln!(writer, "{} {} obj", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => write_name(writer, n),
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        if byte == b'(' || byte == b')' || byte == b'\\' {
                            writer.write_all(b"\\")?;
                        }
                        writer.write_all(&[byte])?;
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    writer.write_all(b"<")?;
                    for byte in s {
                        write!(writer, "{:02X}", byte)?;
                    }
                    writer.write_all(b">")
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    /// Writes `/name`, escaping delimiters, whitespace, `#` and bytes
    /// outside `!`..=`~` as `#xx`.
    pub fn write_name(writer: &mut dyn Write, name: &[u8]) -> io::Result<()> {
        writer.write_all(b"/")?;
        for &byte in name {
            let regular = (b'!'..=b'~').contains(&byte) && !b"#%()/<>[]{}".contains(&byte);
            if regular {
                writer.write_all(&[byte])?;
            } else {
                write!(writer, "#{:02X}", byte)?;
            }
        }
        Ok(())
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            write_name(writer, key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Writes the table as contiguous subsections, always starting with the
    /// free entry for object 0.
    pub fn write_xref<W: Write>(writer: &mut W, xref: &Xref) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 1")?;
        writeln!(writer, "0000000000 65535 f ")?;

        let mut sections: Vec<(u32, Vec<&XrefEntry>)> = Vec::new();
        for (&id, entry) in &xref.entries {
            if id == 0 {
                continue;
            }
            match sections.last_mut() {
                Some((start, entries)) if *start + entries.len() as u32 == id => {
                    entries.push(entry)
                }
                _ => sections.push((id, vec![entry])),
            }
        }

        for (start, entries) in sections {
            writeln!(writer, "{} {}", start, entries.len())?;
            for entry in entries {
                if let XrefEntry::Normal { offset, generation } = *entry {
                    writeln!(writer, "{:010} {:05} n ", offset, generation)?;
                } else {
                    writeln!(writer, "0000000000 65535 f ")?;
                }
            }
        }
        Ok(())
    }
}
