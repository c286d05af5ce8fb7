//! Text flow and page/column state for the two-column resume layout.
//!
//! All geometry is in jsPDF-compatible document millimetres with a top-left
//! origin; conversion to PDF points (bottom-left origin) happens only when
//! operators are emitted. The whole layout state lives in [`LayoutContext`],
//! owned by a single generation call. There is no module-level state, so
//! independent calls never interfere.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::assets::{ImagePayload, LoadedImage};
use crate::fonts::{self, FontStyle, PT_PER_MM};

pub type Rgb = [u8; 3];

pub mod color {
    use super::Rgb;

    pub const SIDEBAR: Rgb = [42, 39, 42]; // #2A272A
    pub const HEADING: Rgb = [248, 236, 228]; // #F8ECE4
    pub const LABEL: Rgb = [255, 234, 207]; // #FFEACF
    pub const BODY: Rgb = [255, 247, 214]; // #FFF7D6
    pub const INK: Rgb = [42, 39, 42];
    pub const MUTED: Rgb = [100, 100, 100];
    pub const SLATE: Rgb = [50, 50, 50];
    pub const BLACK: Rgb = [0, 0, 0];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// Page geometry, palette, and content-length controls.
#[derive(Clone, Debug)]
pub struct Style {
    pub page_width: f32,
    pub page_height: f32,
    pub left_column_width: f32,
    pub left_margin: f32,
    pub column_gap: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub sidebar_fill: Rgb,
    pub max_experience_entries: usize,
    pub max_project_entries: usize,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            page_width: 210.0, // A4
            page_height: 297.0,
            left_column_width: 65.0,
            left_margin: 10.0,
            column_gap: 5.0,
            right_margin: 10.0,
            top_margin: 15.0,
            bottom_margin: 15.0,
            sidebar_fill: color::SIDEBAR,
            max_experience_entries: 4,
            max_project_entries: 7,
        }
    }
}

impl Style {
    pub fn right_column_start(&self) -> f32 {
        self.left_column_width + self.column_gap
    }

    pub fn right_column_width(&self) -> f32 {
        self.page_width - self.right_column_start() - self.right_margin
    }

    /// Text width available inside the sidebar.
    pub fn left_text_width(&self) -> f32 {
        self.left_column_width - self.left_margin * 2.0
    }
}

/// Greedy word wrap: breaks only at whitespace, no hyphenation. A word wider
/// than `max_width` still gets its own line. Blank input yields no lines.
pub(crate) fn wrap(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let joined_width = fonts::text_width_mm(&current, font_size)
            + fonts::text_width_mm(" ", font_size)
            + fonts::text_width_mm(word, font_size);
        if joined_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Horizontal start of one wrapped line within its flow box.
pub(crate) fn line_origin(align: Align, x: f32, max_width: f32, line_width: f32) -> f32 {
    match align {
        Align::Left => x,
        Align::Center => x + (max_width - line_width) / 2.0,
    }
}

/// Owns the in-progress document: the PDF writer, one content stream per
/// page, and the two column cursors. Created, driven, and consumed by a
/// single `generate` call.
pub(crate) struct LayoutContext {
    pdf: Pdf,
    next_id: i32,
    catalog_id: Ref,
    pages_id: Ref,
    fonts: Vec<(&'static str, Ref)>,
    images: Vec<(String, Ref)>,
    pages: Vec<Content>,
    left_y: f32,
    right_y: f32,
    pub(crate) style: Style,
}

impl LayoutContext {
    pub(crate) fn new(style: Style) -> Self {
        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };
        let catalog_id = alloc();
        let pages_id = alloc();
        let fonts = fonts::register_fonts(&mut pdf, &mut alloc);

        let mut ctx = Self {
            pdf,
            next_id,
            catalog_id,
            pages_id,
            fonts,
            images: Vec::new(),
            pages: Vec::new(),
            left_y: style.top_margin,
            right_y: style.top_margin,
            style,
        };
        ctx.new_page();
        ctx
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn cursor(&self, column: Column) -> f32 {
        match column {
            Column::Left => self.left_y,
            Column::Right => self.right_y,
        }
    }

    pub(crate) fn set_cursor(&mut self, column: Column, y: f32) {
        match column {
            Column::Left => self.left_y = y,
            Column::Right => self.right_y = y,
        }
    }

    /// Start a new page: append a content stream, paint the sidebar band
    /// before anything else lands on the page, and reset both column
    /// cursors to the top margin.
    pub(crate) fn new_page(&mut self) {
        self.pages.push(Content::new());
        let (w, h, fill) = (
            self.style.left_column_width,
            self.style.page_height,
            self.style.sidebar_fill,
        );
        self.fill_rect(0.0, 0.0, w, h, fill);
        self.left_y = self.style.top_margin;
        self.right_y = self.style.top_margin;
    }

    /// Guard a placement: if the column cursor has less than `headroom`
    /// millimetres left above the page bottom, break to a fresh page.
    /// Returns the cursor to place at.
    pub(crate) fn ensure_room(&mut self, column: Column, headroom: f32) -> f32 {
        if self.cursor(column) > self.style.page_height - headroom {
            log::debug!(
                "page break: {:?} column at y={:.1} needs {headroom:.1}mm, starting page {}",
                column,
                self.cursor(column),
                self.page_count() + 1,
            );
            self.new_page();
        }
        self.cursor(column)
    }

    fn content(&mut self) -> &mut Content {
        self.pages.last_mut().expect("at least one page")
    }

    fn y_pt(&self, y_mm: f32) -> f32 {
        (self.style.page_height - y_mm) * PT_PER_MM
    }

    pub(crate) fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let rect = (
            x * PT_PER_MM,
            self.y_pt(y + h),
            w * PT_PER_MM,
            h * PT_PER_MM,
        );
        let [r, g, b] = color;
        self.content()
            .save_state()
            .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
            .rect(rect.0, rect.1, rect.2, rect.3)
            .fill_nonzero()
            .restore_state();
    }

    /// Horizontal rule from `x1` to `x2` at baseline `y`.
    pub(crate) fn rule(&mut self, x1: f32, x2: f32, y: f32, color: Rgb, width_mm: f32) {
        let (px1, px2, py) = (x1 * PT_PER_MM, x2 * PT_PER_MM, self.y_pt(y));
        let [r, g, b] = color;
        self.content()
            .save_state()
            .set_stroke_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
            .set_line_width(width_mm * PT_PER_MM)
            .move_to(px1, py)
            .line_to(px2, py)
            .stroke()
            .restore_state();
    }

    /// Draw a single line of text with its baseline at `y`.
    pub(crate) fn text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        font: FontStyle,
        color: Rgb,
    ) {
        let bytes = fonts::to_winansi_bytes(text);
        if bytes.is_empty() {
            return;
        }
        let (px, py) = (x * PT_PER_MM, self.y_pt(y));
        let [r, g, b] = color;
        self.content()
            .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
            .begin_text()
            .set_font(Name(font.pdf_name().as_bytes()), font_size)
            .next_line(px, py)
            .show(Str(&bytes))
            .end_text();
    }

    /// Word-wrap `text` into `max_width` and render each line at
    /// `y + i * line_height`, with the original's tight leading of
    /// `0.5 × font_size`. Returns the cursor just below the last line;
    /// blank text draws nothing and returns `y` unchanged.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn flow(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: f32,
        font_size: f32,
        font: FontStyle,
        color: Rgb,
        align: Align,
    ) -> f32 {
        let lines = wrap(text, max_width, font_size);
        let line_height = font_size * 0.5;
        for (i, line) in lines.iter().enumerate() {
            let lx = line_origin(align, x, max_width, fonts::text_width_mm(line, font_size));
            self.text(line, lx, y + i as f32 * line_height, font_size, font, color);
        }
        y + lines.len() as f32 * line_height
    }

    /// Embed a decoded image as an XObject shared by all pages; returns the
    /// resource name to draw it with.
    pub(crate) fn add_image(&mut self, img: &LoadedImage) -> String {
        let xobj_ref = self.alloc();
        let pdf_name = format!("Im{}", self.images.len() + 1);

        match &img.payload {
            ImagePayload::Jpeg(data) => {
                let mut xobj = self.pdf.image_xobject(xobj_ref, data);
                xobj.filter(Filter::DctDecode);
                xobj.width(img.pixel_width as i32);
                xobj.height(img.pixel_height as i32);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
            }
            ImagePayload::Zlib { rgb, alpha } => {
                let smask_ref = alpha.as_ref().map(|alpha_data| {
                    let mask_ref = self.alloc();
                    let mut mask = self.pdf.image_xobject(mask_ref, alpha_data);
                    mask.filter(Filter::FlateDecode);
                    mask.width(img.pixel_width as i32);
                    mask.height(img.pixel_height as i32);
                    mask.color_space().device_gray();
                    mask.bits_per_component(8);
                    mask_ref
                });

                let mut xobj = self.pdf.image_xobject(xobj_ref, rgb);
                xobj.filter(Filter::FlateDecode);
                xobj.width(img.pixel_width as i32);
                xobj.height(img.pixel_height as i32);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
                if let Some(mask_ref) = smask_ref {
                    xobj.s_mask(mask_ref);
                }
            }
        }

        self.images.push((pdf_name.clone(), xobj_ref));
        pdf_name
    }

    /// Place a previously embedded image with its top-left corner at
    /// `(x, y)`, scaled to `w × h` millimetres.
    pub(crate) fn draw_image(&mut self, pdf_name: &str, x: f32, y: f32, w: f32, h: f32) {
        let transform = [
            w * PT_PER_MM,
            0.0,
            0.0,
            h * PT_PER_MM,
            x * PT_PER_MM,
            self.y_pt(y + h),
        ];
        self.content()
            .save_state()
            .transform(transform)
            .x_object(Name(pdf_name.as_bytes()))
            .restore_state();
    }

    /// Assemble the page tree and shared resources, returning the finished
    /// document bytes and the page count.
    pub(crate) fn finish(mut self) -> (Vec<u8>, usize) {
        let contents = std::mem::take(&mut self.pages);
        let n = contents.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| self.alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| self.alloc()).collect();

        for (i, c) in contents.into_iter().enumerate() {
            self.pdf.stream(content_ids[i], &c.finish());
        }

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        let media_box = Rect::new(
            0.0,
            0.0,
            self.style.page_width * PT_PER_MM,
            self.style.page_height * PT_PER_MM,
        );

        for i in 0..n {
            let mut page = self.pdf.page(page_ids[i]);
            page.media_box(media_box)
                .parent(self.pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            {
                let mut font_dict = resources.fonts();
                for (name, font_ref) in &self.fonts {
                    font_dict.pair(Name(name.as_bytes()), *font_ref);
                }
            }
            if !self.images.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, xobj_ref) in &self.images {
                    xobjects.pair(Name(name.as_bytes()), *xobj_ref);
                }
            }
        }

        (self.pdf.finish(), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_empty_and_blank_produce_no_lines() {
        assert!(wrap("", 50.0, 9.0).is_empty());
        assert!(wrap("   \t  ", 50.0, 9.0).is_empty());
    }

    #[test]
    fn wrap_keeps_lines_within_width() {
        let text = "a quick brown fox jumps over the lazy dog again and again until done";
        let max = 30.0;
        let lines = wrap(text, max, 9.0);
        assert!(lines.len() > 1);
        for line in &lines {
            // Multi-word lines must fit; only a single over-long word may poke out.
            if line.contains(' ') {
                assert!(
                    fonts::text_width_mm(line, 9.0) <= max,
                    "line too wide: {line:?}"
                );
            }
        }
        // Order and content preserved.
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_gives_overlong_word_its_own_line() {
        let lines = wrap("short Pneumonoultramicroscopicsilicovolcanoconiosis end", 10.0, 9.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Pneumonoultramicroscopicsilicovolcanoconiosis");
    }

    #[test]
    fn centered_lines_stay_inside_the_box() {
        let x = 70.0;
        let max = 100.0;
        let line_w = fonts::text_width_mm("Jane Doe", 10.0);
        let origin = line_origin(Align::Center, x, max, line_w);
        assert!(origin >= x);
        assert!(origin + line_w <= x + max + 1e-4);
        // Independent centering: a narrower line starts further right.
        let narrow = line_origin(Align::Center, x, max, line_w / 2.0);
        assert!(narrow > origin);
    }

    #[test]
    fn flow_of_empty_text_returns_y_unchanged() {
        let mut ctx = LayoutContext::new(Style::default());
        let y = ctx.flow(
            "",
            70.0,
            42.0,
            100.0,
            9.0,
            FontStyle::Regular,
            color::BLACK,
            Align::Left,
        );
        assert_eq!(y, 42.0);
    }

    #[test]
    fn flow_advances_by_half_font_size_per_line() {
        let mut ctx = LayoutContext::new(Style::default());
        let y = ctx.flow(
            "one two",
            70.0,
            20.0,
            200.0,
            10.0,
            FontStyle::Regular,
            color::BLACK,
            Align::Left,
        );
        assert_eq!(y, 25.0); // one line, 0.5 × 10pt leading
    }

    #[test]
    fn ensure_room_breaks_page_and_resets_both_cursors() {
        let mut ctx = LayoutContext::new(Style::default());
        ctx.set_cursor(Column::Left, 290.0);
        ctx.set_cursor(Column::Right, 120.0);

        let y = ctx.ensure_room(Column::Left, 15.0);

        assert_eq!(ctx.page_count(), 2);
        assert_eq!(y, ctx.style.top_margin);
        // Both columns restart together on the new page.
        assert_eq!(ctx.cursor(Column::Left), ctx.style.top_margin);
        assert_eq!(ctx.cursor(Column::Right), ctx.style.top_margin);
    }

    #[test]
    fn ensure_room_is_a_noop_with_headroom_left() {
        let mut ctx = LayoutContext::new(Style::default());
        ctx.set_cursor(Column::Right, 100.0);
        let y = ctx.ensure_room(Column::Right, 50.0);
        assert_eq!(ctx.page_count(), 1);
        assert_eq!(y, 100.0);
    }

    #[test]
    fn style_derives_right_column_geometry() {
        let style = Style::default();
        assert_eq!(style.right_column_start(), 70.0);
        assert_eq!(style.right_column_width(), 130.0);
        assert_eq!(style.left_text_width(), 45.0);
    }
}
