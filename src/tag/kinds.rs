use super::{Tag, TagKind};

/// A `<p>` tag holding either text or child tags, never both.
///
/// Paragraphs carry no attributes:
///
/// ```compile_fail
/// use tagtree::Paragraph;
///
/// let paragraph = Paragraph::new("hello").attribute("class", "lead");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph(Tag);

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        let mut tag = Tag::new(TagKind::Paragraph);
        tag.text = text.into();
        Self(tag)
    }

    pub fn with_children(children: impl IntoIterator<Item = Tag>) -> Self {
        let mut tag = Tag::new(TagKind::Paragraph);
        tag.children = children.into_iter().collect();
        Self(tag)
    }
}

impl From<Paragraph> for Tag {
    fn from(paragraph: Paragraph) -> Self {
        paragraph.0
    }
}

/// An `<img>` leaf. It carries attributes only, so it always self-closes.
///
/// Images take neither text nor children:
///
/// ```compile_fail
/// use tagtree::Image;
///
/// let image = Image::new("x.png").text("caption");
/// ```
///
/// ```compile_fail
/// use tagtree::{Image, Tag};
///
/// let image = Image::with_children([Tag::from(Image::new("inner.png"))]);
/// ```
///
/// and a [`Tag`] cannot be put together outside the kind types:
///
/// ```compile_fail
/// use tagtree::{Tag, TagKind};
///
/// let tag = Tag {
///     kind: TagKind::Image,
///     text: "caption".to_string(),
///     children: Vec::new(),
///     attributes: Vec::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image(Tag);

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self(Tag::new(TagKind::Image)).attribute("src", url)
    }

    /// Appends an attribute. Repeated keys are kept and all of them render.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.attributes.push((key.into(), value.into()));
        self
    }
}

impl From<Image> for Tag {
    fn from(image: Image) -> Self {
        image.0
    }
}
