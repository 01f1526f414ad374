//! XSL transformation of rendered sitemaps.

use std::path::Path;

use crate::error::SitemapError;

/// Applies an XSL stylesheet to a rendered sitemap document.
pub trait XslTransformer {
    /// Transform `xml` with the stylesheet at `stylesheet` and return the output.
    fn transform(&self, xml: &str, stylesheet: &Path) -> Result<String, SitemapError>;
}

impl<F> XslTransformer for F
where
    F: Fn(&str, &Path) -> Result<String, SitemapError>,
{
    fn transform(&self, xml: &str, stylesheet: &Path) -> Result<String, SitemapError> {
        self(xml, stylesheet)
    }
}

/// XSLT 1.0 transformer backed by libxslt.
///
/// The result is serialized with the stylesheet's `<xsl:output>` settings
/// (method, encoding, indent, omit-xml-declaration).
#[cfg(feature = "xslt")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LibXsltTransformer;

#[cfg(feature = "xslt")]
impl XslTransformer for LibXsltTransformer {
    fn transform(&self, xml: &str, stylesheet: &Path) -> Result<String, SitemapError> {
        use libxml::parser::Parser;

        let doc = Parser::default()
            .parse_string(xml)
            .map_err(|e| SitemapError::Transform(format!("cannot parse sitemap XML: {}", e)))?;

        let style = libxslt_ffi::Stylesheet::load(stylesheet)?;
        let result = style.apply(&doc)?;
        style.serialize(&result)
    }
}

// Raw bindings are needed because `libxslt::stylesheet::Stylesheet` does not
// expose its pointer, and only `xsltSaveResultToString` honors `<xsl:output>`.
#[cfg(feature = "xslt")]
mod libxslt_ffi {
    use std::ffi::{c_void, CString};
    use std::path::Path;
    use std::ptr;

    use libxml::tree::Document;
    use libxslt::bindings::{
        xmlChar, xmlDocPtr, xmlFree, xmlFreeDoc, xsltApplyStylesheet, xsltFreeStylesheet,
        xsltParseStylesheetFile, xsltSaveResultToString, xsltStylesheetPtr,
    };

    use crate::error::SitemapError;

    pub(super) struct Stylesheet(xsltStylesheetPtr);

    pub(super) struct ResultDoc(xmlDocPtr);

    impl Stylesheet {
        pub(super) fn load(path: &Path) -> Result<Self, SitemapError> {
            if !path.is_file() {
                return Err(SitemapError::Transform(format!(
                    "stylesheet {} is not a file",
                    path.display()
                )));
            }
            let c_path = path
                .to_str()
                .and_then(|p| CString::new(p).ok())
                .ok_or_else(|| {
                    SitemapError::Transform(format!("unusable stylesheet path: {}", path.display()))
                })?;

            libxslt::register_exslt();
            let style = unsafe { xsltParseStylesheetFile(c_path.as_ptr() as *const xmlChar) };
            if style.is_null() {
                return Err(SitemapError::Transform(format!(
                    "cannot load stylesheet {}",
                    path.display()
                )));
            }
            Ok(Stylesheet(style))
        }

        pub(super) fn apply(&self, doc: &Document) -> Result<ResultDoc, SitemapError> {
            let mut params: [*const std::os::raw::c_char; 1] = [ptr::null()];
            let result = unsafe { xsltApplyStylesheet(self.0, doc.doc_ptr(), params.as_mut_ptr()) };
            if result.is_null() {
                return Err(SitemapError::Transform("stylesheet application failed".to_string()));
            }
            Ok(ResultDoc(result))
        }

        pub(super) fn serialize(&self, result: &ResultDoc) -> Result<String, SitemapError> {
            let mut buf: *mut xmlChar = ptr::null_mut();
            let mut len: std::os::raw::c_int = 0;

            let status = unsafe { xsltSaveResultToString(&mut buf, &mut len, result.0, self.0) };
            if status != 0 {
                return Err(SitemapError::Transform("cannot serialize transform result".to_string()));
            }
            if buf.is_null() {
                return Ok(String::new());
            }

            let output = unsafe {
                let bytes = std::slice::from_raw_parts(buf as *const u8, len.max(0) as usize);
                let text = String::from_utf8_lossy(bytes).into_owned();
                free_xml(buf as *mut c_void);
                text
            };
            Ok(output)
        }
    }

    unsafe fn free_xml(mem: *mut c_void) {
        let free_fn = xmlFree;
        match free_fn {
            Some(free) => free(mem),
            None => libc::free(mem),
        }
    }

    impl Drop for Stylesheet {
        fn drop(&mut self) {
            unsafe { xsltFreeStylesheet(self.0) }
        }
    }

    impl Drop for ResultDoc {
        fn drop(&mut self) {
            unsafe { xmlFreeDoc(self.0) }
        }
    }
}

/// Stand-in used when the crate is built without the `xslt` feature.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTransformer;

impl XslTransformer for UnavailableTransformer {
    fn transform(&self, _xml: &str, stylesheet: &Path) -> Result<String, SitemapError> {
        Err(SitemapError::Transform(format!(
            "cannot apply {}: built without the `xslt` feature",
            stylesheet.display()
        )))
    }
}

/// Transformer used by `SitemapBuilder::build` and friends.
#[cfg(feature = "xslt")]
pub type DefaultTransformer = LibXsltTransformer;

/// Transformer used by `SitemapBuilder::build` and friends.
#[cfg(not(feature = "xslt"))]
pub type DefaultTransformer = UnavailableTransformer;
