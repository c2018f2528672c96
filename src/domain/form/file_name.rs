//! Output file naming for the two PDF backends.
//!
//! The markup backend appends a timestamp; the document-model backend keeps
//! the caller's name. Both guarantee exactly one `.pdf` suffix and never let
//! a name escape its target directory.

use crate::domain::foundation::FileStamp;

const PDF_EXTENSION: &str = ".pdf";

/// Replaces path separators so the name stays a single path component.
fn flatten_separators(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Removes one trailing `.pdf`, ignoring case.
pub fn strip_pdf_extension(name: &str) -> &str {
    let split = name.len().saturating_sub(PDF_EXTENSION.len());
    match name.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(PDF_EXTENSION) => &name[..split],
        _ => name,
    }
}

/// `<base>_<YYYYMMDDHHMMSS>`, without extension.
///
/// `fallback_base` is used when stripping `.pdf` leaves nothing.
pub fn timestamped_stem(name: &str, fallback_base: &str, stamp: FileStamp) -> String {
    let base = strip_pdf_extension(name);
    let base = if base.is_empty() { fallback_base } else { base };
    format!("{}_{}", flatten_separators(base), stamp)
}

/// The caller's name kept as-is, with `.pdf` appended only when missing.
pub fn verbatim_pdf_name(name: &str) -> String {
    let name = flatten_separators(name);
    if strip_pdf_extension(&name).len() == name.len() {
        format!("{}{}", name, PDF_EXTENSION)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn stamp() -> FileStamp {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 58))
            .unwrap();
        FileStamp::from_naive(dt)
    }

    #[test]
    fn strips_extension_case_insensitively() {
        assert_eq!(strip_pdf_extension("report.pdf"), "report");
        assert_eq!(strip_pdf_extension("report.PDF"), "report");
        assert_eq!(strip_pdf_extension("report"), "report");
        assert_eq!(strip_pdf_extension("report.pdf.pdf"), "report.pdf");
    }

    #[test]
    fn strip_handles_multibyte_names() {
        assert_eq!(strip_pdf_extension("ñ"), "ñ");
        assert_eq!(strip_pdf_extension("añoñ.pdf"), "añoñ");
    }

    #[test]
    fn timestamped_stem_appends_stamp() {
        assert_eq!(
            timestamped_stem("FormReport.pdf", "FormReport", stamp()),
            "FormReport_20250131235958"
        );
    }

    #[test]
    fn timestamped_stem_uses_fallback_for_bare_extension() {
        assert_eq!(
            timestamped_stem(".pdf", "FormReport", stamp()),
            "FormReport_20250131235958"
        );
    }

    #[test]
    fn timestamped_stem_flattens_separators() {
        assert_eq!(
            timestamped_stem("../etc/passwd", "FormReport", stamp()),
            ".._etc_passwd_20250131235958"
        );
    }

    #[test]
    fn verbatim_name_appends_missing_extension() {
        assert_eq!(verbatim_pdf_name("informe"), "informe.pdf");
        assert_eq!(verbatim_pdf_name("informe.pdf"), "informe.pdf");
        assert_eq!(verbatim_pdf_name("informe.PDF"), "informe.PDF");
    }

    proptest! {
        #[test]
        fn timestamped_name_has_exactly_one_pdf_suffix(base in "[A-Za-z0-9_-]{0,24}", with_ext in any::<bool>()) {
            let input = if with_ext { format!("{}.pdf", base) } else { base };
            let name = format!("{}.pdf", timestamped_stem(&input, "FormReport", stamp()));

            prop_assert!(name.ends_with("_20250131235958.pdf"));
            prop_assert!(!name.ends_with(".pdf_20250131235958.pdf"));
        }

        #[test]
        fn verbatim_name_never_doubles_extension(base in "[A-Za-z0-9_-]{1,24}", with_ext in any::<bool>()) {
            let input = if with_ext { format!("{}.pdf", base) } else { base.clone() };
            prop_assert_eq!(verbatim_pdf_name(&input), format!("{}.pdf", base));
        }
    }
}
