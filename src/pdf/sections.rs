//! Section renderers. Each renderer takes the current cursor, appends its
//! drawing operations, and returns the advanced cursor; page breaks happen
//! only through `LayoutContext::ensure_room`. The left column renders fully
//! before the right column starts, so image loads stay strictly sequential.

use crate::assets::{AssetResolver, LoadedImage};
use crate::fonts::FontStyle;
use crate::model::ResumeData;
use crate::pdf::layout::{color, wrap, Align, Column, LayoutContext};

/// Sidebar section heading: 10pt title plus a 0.5mm rule across the column.
fn left_heading(ctx: &mut LayoutContext, title: &str, y: f32, before: f32, after: f32) -> f32 {
    let lm = ctx.style.left_margin;
    let rule_end = ctx.style.left_column_width - 10.0;
    ctx.text(title, lm, y, 10.0, FontStyle::Bold, color::HEADING);
    let y = y + before;
    ctx.rule(lm, rule_end, y, color::HEADING, 0.5);
    y + after
}

/// Main column section heading: 12pt title plus a 0.8mm full-width rule.
fn right_heading(ctx: &mut LayoutContext, title: &str, y: f32, after: f32) -> f32 {
    let x0 = ctx.style.right_column_start();
    let rule_end = ctx.style.page_width - ctx.style.right_margin;
    ctx.text(title, x0, y, 12.0, FontStyle::Bold, color::INK);
    let y = y + 5.0;
    ctx.rule(x0, rule_end, y, color::INK, 0.8);
    y + after
}

/// Resolve an entry icon: explicit reference first, positional convention
/// as fallback. A failed load degrades to the text-only layout.
fn load_icon(
    assets: &dyn AssetResolver,
    explicit: Option<&str>,
    positional: String,
    what: &str,
) -> Option<LoadedImage> {
    let locator = explicit.map(str::to_string).unwrap_or(positional);
    match assets.load_image(&locator) {
        Ok(img) => Some(img),
        Err(e) => {
            log::warn!("{what} icon {locator} unavailable, falling back to text-only: {e}");
            None
        }
    }
}

pub(crate) fn render_left_column(
    ctx: &mut LayoutContext,
    data: &ResumeData,
    assets: &dyn AssetResolver,
) {
    let lm = ctx.style.left_margin;
    let col_w = ctx.style.left_column_width;
    let text_w = ctx.style.left_text_width();
    let mut y = ctx.cursor(Column::Left);

    // Profile image, centered in the sidebar.
    match assets.load_image(&data.profile_image) {
        Ok(img) => {
            let name = ctx.add_image(&img);
            let size = 45.0;
            let x = lm + (col_w - lm * 2.0 - size) / 2.0;
            ctx.draw_image(&name, x, y, size, size);
            y += size + 12.0;
        }
        Err(e) => {
            log::warn!("profile image {} unavailable: {e}", data.profile_image);
            y += 10.0;
        }
    }

    // Contact
    y = left_heading(ctx, "CONTACT", y, 5.0, 6.0);
    let entries: [(&str, &str, f32, f32); 3] = [
        ("Location", data.location.as_str(), 8.0, 4.0),
        ("Email", data.email.as_str(), 7.0, 4.0),
        ("LinkedIn", data.linkedin.as_str(), 7.0, 7.0),
    ];
    for (label, value, value_size, gap) in entries {
        ctx.text(label, lm, y, 8.0, FontStyle::Bold, color::LABEL);
        y += 3.5;
        y = ctx.flow(
            value,
            lm,
            y,
            text_w,
            value_size,
            FontStyle::Regular,
            color::BODY,
            Align::Left,
        );
        y += gap;
    }

    // Languages
    y = left_heading(ctx, "LANGUAGES", y, 4.0, 5.0);
    y = ctx.flow(
        &data.languages,
        lm,
        y,
        text_w,
        8.0,
        FontStyle::Regular,
        color::BODY,
        Align::Left,
    );
    y += 6.0;

    // Experience-years counter: big literal number, unit label on the same
    // baseline (the PDF is static, unlike the animated on-page widget).
    y = left_heading(ctx, "EXPERIENCE", y, 4.0, 8.0);
    let years = format!("{}+", data.about.experience_years);
    ctx.text(&years, lm + 10.0, y, 24.0, FontStyle::Bold, color::LABEL);
    ctx.text("Years", lm + 35.0, y, 11.0, FontStyle::Regular, color::BODY);
    y += 10.0;

    // Education
    y = left_heading(ctx, "EDUCATION", y, 4.0, 5.0);
    y = render_education(ctx, data, assets, y);

    // Skills: one bulleted entry per technical skill, spanning pages as
    // needed. The soft list is not part of the PDF sidebar.
    y = left_heading(ctx, "SKILLS", y, 4.0, 5.0);
    let bottom = ctx.style.bottom_margin;
    for skill in &data.skills.technical {
        ctx.set_cursor(Column::Left, y);
        y = ctx.ensure_room(Column::Left, bottom);
        ctx.text("•", lm, y, 7.5, FontStyle::Regular, color::LABEL);
        y = ctx.flow(
            skill,
            lm + 4.0,
            y,
            text_w - 4.0,
            7.5,
            FontStyle::Regular,
            color::BODY,
            Align::Left,
        );
        y += 2.0;
    }
    ctx.set_cursor(Column::Left, y);
}

/// Education entry: logo with text to its right when the logo loads, the
/// stacked text-only layout otherwise. The success path keeps the original's
/// per-line leadings (4.0 institution, 3.5 degree) instead of the flow
/// engine's 0.5×size rule.
fn render_education(
    ctx: &mut LayoutContext,
    data: &ResumeData,
    assets: &dyn AssetResolver,
    y: f32,
) -> f32 {
    let lm = ctx.style.left_margin;
    let text_w = ctx.style.left_text_width();
    let edu = &data.education;

    let logo = edu.logo.as_deref().and_then(|locator| {
        match assets.load_image(locator) {
            Ok(img) => Some(img),
            Err(e) => {
                log::warn!("education logo {locator} unavailable: {e}");
                None
            }
        }
    });

    if let Some(img) = logo {
        let icon_h = 14.0;
        let icon_w = icon_h * img.aspect_ratio();
        let name = ctx.add_image(&img);
        ctx.draw_image(&name, lm, y, icon_w, icon_h);

        let text_x = lm + icon_w + 3.0;
        let side_w = text_w - icon_w - 3.0;

        let inst_lines = wrap(&edu.institution, side_w, 8.5);
        for (i, line) in inst_lines.iter().enumerate() {
            ctx.text(
                line,
                text_x,
                y + 4.0 + i as f32 * 4.0,
                8.5,
                FontStyle::Bold,
                color::LABEL,
            );
        }
        let inst_h = inst_lines.len() as f32 * 4.0;

        let degree_lines = wrap(&edu.degree, side_w, 7.5);
        for (i, line) in degree_lines.iter().enumerate() {
            ctx.text(
                line,
                text_x,
                y + 4.0 + inst_h + i as f32 * 3.5,
                7.5,
                FontStyle::Regular,
                color::BODY,
            );
        }
        let degree_h = degree_lines.len() as f32 * 3.5;

        ctx.text(
            &edu.duration,
            text_x,
            y + 4.0 + inst_h + degree_h,
            7.0,
            FontStyle::Italic,
            color::LABEL,
        );

        y + f32::max(icon_h, 4.0 + inst_h + degree_h + 3.0) + 6.0
    } else {
        let mut y = ctx.flow(
            &edu.institution,
            lm,
            y,
            text_w,
            8.5,
            FontStyle::Bold,
            color::LABEL,
            Align::Left,
        );
        y += 3.0;
        y = ctx.flow(
            &edu.degree,
            lm,
            y,
            text_w,
            7.5,
            FontStyle::Regular,
            color::BODY,
            Align::Left,
        );
        y += 3.0;
        y = ctx.flow(
            &edu.duration,
            lm,
            y,
            text_w,
            7.0,
            FontStyle::Italic,
            color::LABEL,
            Align::Left,
        );
        y + 6.0
    }
}

pub(crate) fn render_right_column(
    ctx: &mut LayoutContext,
    data: &ResumeData,
    assets: &dyn AssetResolver,
) {
    let x0 = ctx.style.right_column_start();
    let w = ctx.style.right_column_width();
    let mut y = ctx.cursor(Column::Right);

    // Header
    ctx.text(
        &data.name.to_uppercase(),
        x0,
        y,
        28.0,
        FontStyle::Bold,
        color::INK,
    );
    y += 10.0;
    ctx.text(&data.title, x0, y, 14.0, FontStyle::Regular, color::MUTED);
    y += 12.0;

    // About
    y = right_heading(ctx, &data.about.title, y, 6.0);
    for para in &data.about.paragraphs {
        y = ctx.flow(
            para,
            x0,
            y,
            w,
            9.0,
            FontStyle::Regular,
            color::BLACK,
            Align::Left,
        );
        y += 4.0;
    }
    y += 5.0;

    // Achievements: title + short description, no icons in the PDF.
    y = right_heading(ctx, "KEY ACHIEVEMENTS", y, 8.0);
    for achievement in &data.achievements {
        ctx.set_cursor(Column::Right, y);
        y = ctx.ensure_room(Column::Right, 30.0);

        y = ctx.flow(
            &achievement.title,
            x0,
            y,
            w,
            10.0,
            FontStyle::Bold,
            color::BLACK,
            Align::Left,
        );
        y += 2.0;
        y = ctx.flow(
            &achievement.desc,
            x0,
            y,
            w,
            8.0,
            FontStyle::Regular,
            color::SLATE,
            Align::Left,
        );
        y += 8.0;
    }
    y += 3.0;

    // Projects, capped to the first N in input order.
    y = right_heading(ctx, "KEY PROJECTS", y, 8.0);
    let max_projects = ctx.style.max_project_entries;
    for (i, project) in data.projects.iter().take(max_projects).enumerate() {
        ctx.set_cursor(Column::Right, y);
        y = ctx.ensure_room(Column::Right, 40.0);

        let icon = load_icon(
            assets,
            project.icon.as_deref(),
            format!("icons/proj{}.png", i + 1),
            "project",
        );
        match icon {
            Some(img) => {
                let max_icon = 16.0;
                let aspect = img.aspect_ratio();
                let (iw, ih) = if aspect > 1.0 {
                    (max_icon, max_icon / aspect)
                } else {
                    (max_icon * aspect, max_icon)
                };
                let name = ctx.add_image(&img);
                ctx.draw_image(&name, x0, y, iw, ih);

                let text_x = x0 + max_icon + 6.0;
                ctx.text(&project.title, text_x, y + 5.0, 10.0, FontStyle::Bold, color::BLACK);
                ctx.text(
                    &project.duration,
                    text_x,
                    y + 11.0,
                    7.0,
                    FontStyle::Italic,
                    color::MUTED,
                );
                y += f32::max(ih, 16.0) + 5.0;
            }
            None => {
                ctx.text(&project.title, x0, y, 10.0, FontStyle::Bold, color::BLACK);
                y += 5.0;
                ctx.text(&project.duration, x0, y, 7.0, FontStyle::Italic, color::MUTED);
                y += 5.0;
            }
        }

        y = ctx.flow(
            &project.description,
            x0,
            y,
            w,
            8.0,
            FontStyle::Regular,
            color::BLACK,
            Align::Left,
        );
        y += 3.0;

        ctx.text("Skills: ", x0, y, 7.5, FontStyle::Bold, color::INK);
        y = ctx.flow(
            &project.skills.join(" • "),
            x0 + 10.0,
            y,
            w - 10.0,
            7.5,
            FontStyle::Regular,
            color::BLACK,
            Align::Left,
        );
        y += 9.0;
    }
    y += 3.0;

    // Experience, capped like projects but with a taller entry layout.
    ctx.set_cursor(Column::Right, y);
    y = ctx.ensure_room(Column::Right, 50.0);
    y = right_heading(ctx, "PROFESSIONAL EXPERIENCE", y, 8.0);
    let max_experiences = ctx.style.max_experience_entries;
    for (i, exp) in data.experiences.iter().take(max_experiences).enumerate() {
        ctx.set_cursor(Column::Right, y);
        y = ctx.ensure_room(Column::Right, 50.0);

        let icon = load_icon(
            assets,
            exp.icon.as_deref(),
            format!("icons/exp{}.png", i + 1),
            "experience",
        );
        match icon {
            Some(img) => {
                let max_icon = 18.0;
                let aspect = img.aspect_ratio();
                let (iw, ih) = if aspect > 1.0 {
                    (max_icon, max_icon / aspect)
                } else {
                    (max_icon * aspect, max_icon)
                };
                let name = ctx.add_image(&img);
                ctx.draw_image(&name, x0, y, iw, ih);

                let text_x = x0 + max_icon + 6.0;
                ctx.text(&exp.full_title, text_x, y + 6.0, 10.0, FontStyle::Bold, color::BLACK);
                ctx.text(
                    &exp.duration,
                    text_x,
                    y + 12.0,
                    8.0,
                    FontStyle::Italic,
                    color::MUTED,
                );
                y += f32::max(ih, 18.0) + 6.0;
            }
            None => {
                ctx.text(&exp.full_title, x0, y, 10.0, FontStyle::Bold, color::BLACK);
                y += 6.0;
                ctx.text(&exp.duration, x0, y, 8.0, FontStyle::Italic, color::MUTED);
                y += 6.0;
            }
        }

        y = ctx.flow(
            &exp.description,
            x0,
            y,
            w,
            9.0,
            FontStyle::Regular,
            color::BLACK,
            Align::Left,
        );
        y += 4.0;

        ctx.text("Skills: ", x0, y, 7.5, FontStyle::Bold, color::INK);
        y = ctx.flow(
            &exp.skills.join(" • "),
            x0 + 10.0,
            y,
            w - 10.0,
            7.5,
            FontStyle::Regular,
            color::BLACK,
            Align::Left,
        );
        y += 10.0;
    }
    ctx.set_cursor(Column::Right, y);
}
