//! Core types describing what to generate

use chrono::{Local, NaiveDate};

/// Default number of spaces a tab expands to in skeleton bodies.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Supported boilerplate file types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Python script with a main-guarded entry point
    Python,
    /// LaTeX article document
    Latex,
    /// C source file
    C,
    /// C++ source file
    Cpp,
    /// Java class file
    Java,
}

impl FileType {
    /// All file types, in menu order.
    pub const ALL: [FileType; 5] = [
        FileType::Python,
        FileType::Latex,
        FileType::C,
        FileType::Cpp,
        FileType::Java,
    ];

    /// Maps a 1-based menu choice to a file type.
    ///
    /// Returns None for 0 and for choices past the end of the menu.
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    /// File suffix without the leading dot.
    pub fn suffix(&self) -> &'static str {
        match self {
            FileType::Python => "py",
            FileType::Latex => "tex",
            FileType::C => "c",
            FileType::Cpp => "cpp",
            FileType::Java => "java",
        }
    }

    /// Human-readable name shown in menus and document blocks.
    pub fn display_name(&self) -> &'static str {
        match self {
            FileType::Python => "Python",
            FileType::Latex => "LaTeX",
            FileType::C => "C",
            FileType::Cpp => "C++",
            FileType::Java => "Java",
        }
    }

    /// Whether this file type supports an optional document block.
    ///
    /// LaTeX carries its metadata on the title page instead.
    pub fn uses_doc_block(&self) -> bool {
        !matches!(self, FileType::Latex)
    }
}

/// Everything needed to render one boilerplate file.
///
/// Built per generation cycle and discarded after the write.
#[derive(Debug, Clone)]
pub struct TemplateRequest {
    /// Kind of file to generate
    pub file_type: FileType,
    /// Base name without suffix; names the class in Java skeletons
    pub stem: String,
    /// Author recorded in the document block and LaTeX title page
    pub author: String,
    /// ID number recorded in the document block
    pub id_number: String,
    /// Date recorded in the document block and LaTeX title page
    pub date: NaiveDate,
    /// Document title, required for LaTeX
    pub title: Option<String>,
    /// Whether to include the document block
    pub doc_block: bool,
    /// Number of spaces a tab expands to in the skeleton body
    pub tab_width: usize,
}

impl TemplateRequest {
    /// Creates a request with empty metadata and today's date.
    pub fn new(file_type: FileType, stem: impl Into<String>) -> Self {
        TemplateRequest {
            file_type,
            stem: stem.into(),
            author: String::new(),
            id_number: String::new(),
            date: Local::now().date_naive(),
            title: None,
            doc_block: true,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Sets the document block author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the document block ID number.
    pub fn with_id_number(mut self, id_number: impl Into<String>) -> Self {
        self.id_number = id_number.into();
        self
    }

    /// Sets the recorded date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the LaTeX document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables or disables the document block.
    pub fn with_doc_block(mut self, doc_block: bool) -> Self {
        self.doc_block = doc_block;
        self
    }

    /// Sets the tab expansion width.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }
}
