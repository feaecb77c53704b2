//! Template rendering
//!
//! Skeleton bodies are written with literal tabs and expanded to spaces at
//! render time, so one body definition serves every tab width.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::TemplateError;
use crate::models::{FileType, TemplateRequest};

const PYTHON_BODY: &str = "def main() -> None:\n\
    \tpass  # PLACEHOLDER\n\
    \n\
    \n\
    if __name__ == \"__main__\":\n\
    \tmain()";

const C_BODY: &str = "#include <stdio.h>\n\
    \n\
    int main(void)\n\
    {\n\
    \t// PLACEHOLDER\n\
    \n\
    \treturn 0;\n\
    }";

const CPP_BODY: &str = "#include <iostream>\n\
    \n\
    int main(void)\n\
    {\n\
    \t// PLACEHOLDER\n\
    \n\
    \treturn 0;\n\
    }";

/// Renders the full file content for a request.
///
/// The result carries no trailing newline; the last line of every skeleton
/// is a closing brace or statement.
pub fn render(request: &TemplateRequest) -> Result<String, TemplateError> {
    debug!(file_type = ?request.file_type, stem = %request.stem, "rendering template");

    match request.file_type {
        FileType::Python => Ok(render_python(request)),
        FileType::Latex => render_latex(request),
        FileType::C => Ok(render_with_comment_header(request, C_BODY)),
        FileType::Cpp => Ok(render_with_comment_header(request, CPP_BODY)),
        FileType::Java => Ok(render_java(request)),
    }
}

/// Formats a date the way document blocks record it, e.g. "January 01, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Replaces every tab with `width` spaces.
///
/// Skeleton bodies only use tabs for leading indentation, so plain
/// replacement matches tab-stop expansion.
pub fn expand_tabs(text: &str, width: usize) -> String {
    text.replace('\t', &" ".repeat(width))
}

/// The metadata comment block, between `open` and `close` delimiter lines.
fn document_block(request: &TemplateRequest, open: &str, close: &str) -> String {
    format!(
        "{}\n\
         Author: {}\n\
         ID#: {}\n\
         Date: {}\n\
         Description: {} code for [PLACEHOLDER]\n\
         {}",
        open,
        request.author,
        request.id_number,
        format_date(request.date),
        request.file_type.display_name(),
        close
    )
}

fn render_python(request: &TemplateRequest) -> String {
    let body = expand_tabs(PYTHON_BODY, request.tab_width);
    if request.doc_block {
        // Two blank lines between the docstring and the first definition
        format!(
            "{}\n\n\n{}",
            document_block(request, "\"\"\"", "\"\"\""),
            body
        )
    } else {
        body
    }
}

fn render_with_comment_header(request: &TemplateRequest, body: &str) -> String {
    let body = expand_tabs(body, request.tab_width);
    if request.doc_block {
        format!("{}\n\n{}", document_block(request, "/*", "*/"), body)
    } else {
        body
    }
}

fn render_java(request: &TemplateRequest) -> String {
    // The class is named after the resolved file stem
    let body = format!(
        "public class {} {{\n\
         \tpublic static void main(String[] args) {{\n\
         \t\t\n\
         \t}}\n\
         }}",
        request.stem
    );
    let body = expand_tabs(&body, request.tab_width);
    if request.doc_block {
        format!("{}\n\n{}", document_block(request, "/*", "*/"), body)
    } else {
        body
    }
}

fn render_latex(request: &TemplateRequest) -> Result<String, TemplateError> {
    let title = request.title.as_deref().ok_or(TemplateError::MissingTitle)?;

    Ok(format!(
        "\\documentclass[12pt]{{article}}\n\
         \\usepackage{{amsmath, amsfonts, amsthm, amssymb}}\n\
         \\usepackage{{fancyvrb, tcolorbox, geometry, graphicx}}\n\
         \n\
         \\newgeometry{{top=1in, bottom=1in, outer=1in, inner=1in}}\n\
         \n\
         \\theoremstyle{{definition}}\n\
         \\newtheorem*{{example}}{{Example}}\n\
         \\newtheorem*{{definition}}{{Definition}}\n\
         \n\
         \\title{{\\Huge {}}}\n\
         \\author{{\\huge {}}}\n\
         \\date{{\\large {}}}\n\
         \n\
         \\begin{{document}}\n\
         \n\
         \\maketitle\n\
         \\pagenumbering{{gobble}}\n\
         \\newpage\n\
         \\pagenumbering{{arabic}}\n\
         \n\
         \n\
         \n\
         \\end{{document}}",
        title,
        request.author,
        format_date(request.date)
    ))
}
