use crate::models::MatchedCandidate;
use crate::report::layout::{paginate, PageLayout, PAGE_HEIGHT, PAGE_WIDTH};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt};
use thiserror::Error;

/// Errors that can occur while producing the report document
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

const DOCUMENT_TITLE: &str = "Candidate Match Report";
const LAYER_NAME: &str = "content";

/// Render the ranked candidates into a PDF, one A4 page per candidate.
///
/// The writer cannot emit a zero-page document, so an empty candidate list
/// produces a single blank page.
pub fn render_report(candidates: &[MatchedCandidate]) -> Result<Vec<u8>, ReportError> {
    let layouts = paginate(candidates);

    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm::from(Pt(PAGE_WIDTH)),
        Mm::from(Pt(PAGE_HEIGHT)),
        LAYER_NAME,
    );

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (index, layout) in layouts.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(
                Mm::from(Pt(PAGE_WIDTH)),
                Mm::from(Pt(PAGE_HEIGHT)),
                LAYER_NAME,
            );
            doc.get_page(page).get_layer(layer)
        };
        draw_page(&layer, layout, &regular, &bold);
    }

    Ok(doc.save_to_bytes()?)
}

fn draw_page(
    layer: &PdfLayerReference,
    layout: &PageLayout,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    for line in &layout.lines {
        let font = if line.bold { bold } else { regular };
        layer.use_text(
            line.text.clone(),
            line.size,
            Mm::from(Pt(line.x)),
            Mm::from(Pt(line.y)),
            font,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(name: &str) -> MatchedCandidate {
        MatchedCandidate {
            candidate_name: name.to_string(),
            match_count: 1,
            matched_skills: vec!["rust".to_string()],
            summary: "Matched 1 of 1 required skills. Candidate skill set: rust.".to_string(),
            feedback: None,
            all_skills: vec!["rust".to_string()],
            transcript: "Interviewer: Hi. Candidate: Hello.".to_string(),
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_report(&[matched("Ada"), matched("Grace")]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_empty_pool_still_valid() {
        let bytes = render_report(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
