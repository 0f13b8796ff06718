use std::io::{self, Write};

use tracing::debug;

use super::store::ErrorCollection;
use crate::wrap::{LineWrapper, TextWrapper};

/// Indent of each category header
pub const CATEGORY_INDENT: usize = 6;

/// Indent of each error message under its category header
pub const ERROR_INDENT: usize = 12;

impl ErrorCollection {
    /// Write the report to `w`, wrapped to the default width.
    ///
    /// A non-empty `name` is put in front of the summary line as `"<name>: "`.
    pub fn report<W: Write>(&self, w: &mut W, name: &str) -> io::Result<()> {
        self.report_with(w, name, &TextWrapper::default())
    }

    /// Write the report to `w` using the given wrapper
    pub fn report_with<W, L>(&self, w: &mut W, name: &str, wrapper: &L) -> io::Result<()>
    where
        W: Write,
        L: LineWrapper + ?Sized,
    {
        let (total, categories) = self.count_errors();
        debug!(report = name, total, categories, "rendering report");

        let summary = self.summary();
        let block = if name.is_empty() {
            wrapper.wrap(&summary, 0)
        } else {
            wrapper.wrap_prefixed(&format!("{name}: "), &summary, 0)
        };
        w.write_all(block.as_bytes())?;

        for category in self.sorted_keys() {
            self.report_category(w, wrapper, category)?;
        }
        Ok(())
    }

    /// Render the report into a string, wrapped to the default width
    pub fn report_to_string(&self, name: &str) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.report(&mut buf, name);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn report_category<W, L>(&self, w: &mut W, wrapper: &L, category: &str) -> io::Result<()>
    where
        W: Write,
        L: LineWrapper + ?Sized,
    {
        let header = wrapper.wrap(&self.category_summary(category), CATEGORY_INDENT);
        w.write_all(header.as_bytes())?;

        let errs = self.errors(category);
        let digits = ordinal_width(errs.len());

        for (i, err) in errs.iter().enumerate() {
            let prefix = if errs.len() > 1 {
                format!("{:>digits$} : ", i + 1)
            } else {
                String::new()
            };
            let block = wrapper.wrap_prefixed(&prefix, &err.to_string(), ERROR_INDENT);
            w.write_all(block.as_bytes())?;
        }
        Ok(())
    }
}

/// Number of decimal digits in the largest ordinal `count`
fn ordinal_width(count: usize) -> usize {
    let mut digits = 1;
    let mut n = count / 10;
    while n > 0 {
        digits += 1;
        n /= 10;
    }
    digits
}
