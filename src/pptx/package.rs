//! OPC packaging: writes a presentation and its fixed support parts into a
//! `.pptx` zip container.
//!
//! Every deck shares one blank slide master, one blank layout and one
//! theme. Relationship IDs in `presentation.xml.rels` are fixed for the
//! master (`rId1`) and theme (`rId2`); slides follow from `rId3`.

use super::pres::MutablePresentation;
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

/// Document properties written to `docProps/core.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: String,
    pub creator: Option<String>,
}

/// Thin wrapper that writes named parts into an in-memory zip.
struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PackageWriter {
    fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated),
        }
    }

    fn add_part(&mut self, name: &str, content: &str) -> Result<()> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        Ok(self.zip.finish()?.into_inner())
    }
}

/// Serialize `presentation` into `.pptx` bytes.
pub fn write_package(
    presentation: &MutablePresentation,
    properties: &CoreProperties,
) -> Result<Vec<u8>> {
    let slide_count = presentation.slide_count();
    let slide_rel_ids: Vec<String> = (0..slide_count).map(|i| format!("rId{}", i + 3)).collect();

    let mut package = PackageWriter::new();
    package.add_part("[Content_Types].xml", &content_types(slide_count)?)?;
    package.add_part("_rels/.rels", &root_relationships()?)?;
    package.add_part("docProps/core.xml", &core_properties(properties)?)?;
    package.add_part(
        "ppt/presentation.xml",
        &presentation.generate_presentation_xml(&slide_rel_ids)?,
    )?;
    package.add_part(
        "ppt/_rels/presentation.xml.rels",
        &presentation_relationships(&slide_rel_ids)?,
    )?;
    package.add_part("ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER)?;
    package.add_part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &relationships(&[
            ("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
            ("rId2", REL_THEME, "../theme/theme1.xml"),
        ])?,
    )?;
    package.add_part("ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT)?;
    package.add_part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &relationships(&[("rId1", REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml")])?,
    )?;
    package.add_part("ppt/theme/theme1.xml", THEME)?;

    let slide_rels = relationships(&[("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml")])?;
    for (index, slide) in presentation.slides().iter().enumerate() {
        let number = index + 1;
        package.add_part(&format!("ppt/slides/slide{number}.xml"), &slide.to_xml()?)?;
        package.add_part(&format!("ppt/slides/_rels/slide{number}.xml.rels"), &slide_rels)?;
    }

    let bytes = package.finish()?;
    log::debug!("packaged pptx: {} slides, {} bytes", slide_count, bytes.len());
    Ok(bytes)
}

fn content_types(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_HEADER);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    for number in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{number}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn root_relationships() -> Result<String> {
    relationships(&[
        ("rId1", REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        ("rId2", REL_CORE_PROPERTIES, "docProps/core.xml"),
    ])
}

fn presentation_relationships(slide_rel_ids: &[String]) -> Result<String> {
    let targets: Vec<String> = (1..=slide_rel_ids.len())
        .map(|n| format!("slides/slide{n}.xml"))
        .collect();
    let mut entries: Vec<(&str, &str, &str)> = vec![
        ("rId1", REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        ("rId2", REL_THEME, "theme/theme1.xml"),
    ];
    for (id, target) in slide_rel_ids.iter().zip(&targets) {
        entries.push((id.as_str(), REL_SLIDE, target.as_str()));
    }
    relationships(&entries)
}

/// A `.rels` part from `(id, type, target)` triples.
fn relationships(entries: &[(&str, &str, &str)]) -> Result<String> {
    let mut xml = String::with_capacity(256 + entries.len() * 160);
    xml.push_str(XML_HEADER);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    for (id, kind, target) in entries {
        write!(
            xml,
            r#"<Relationship Id="{id}" Type="{kind}" Target="{target}"/>"#
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn core_properties(properties: &CoreProperties) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_HEADER);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    write!(xml, "<dc:title>{}</dc:title>", escape_xml(&properties.title))?;
    if let Some(creator) = &properties.creator {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
    }
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

const SLIDE_MASTER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>
"#;

const SLIDE_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank">
  <p:cSld name="Blank">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
</p:sldLayout>
"#;

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Office">
      <a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
      <a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Office">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>
"#;
