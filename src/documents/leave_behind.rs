use super::content::*;
use super::{content_page, end_page, fee_section};
use hromada_compositor::{
    CONTACT_EMAIL, CallToAction, Compositor, SITE_URL, StatStyle, TextStyle, palette,
};
use hromada_layout::FontRole;
use hromada_render_core::{RenderError, Surface};

pub(super) const PAGES: usize = 2;

const CTA_HEIGHT: f32 = 46.0;
const CTA_MIN_BOTTOM: f32 = 78.0;

pub(super) fn compose<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<(), RenderError> {
    let y = overview_page(c)?;
    end_page(c, y)?;
    process_page(c)
}

/// Pull quote, mission, rationale and the project spotlight.
fn overview_page<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<f32, RenderError> {
    let left = c.left();
    let width = c.content_width();
    let mut y = content_page(c, 1, PAGES)? - 8.0;

    let quote = TextStyle::new(FontRole::Head, 15.0)
        .color(palette::NAVY)
        .leading(22.0)
        .width(width - 12.0);
    y = c.text_block(left + 4.0, y, PULL_QUOTE, &quote) - 2.0;

    let attribution = TextStyle::body(8.0).color(palette::CHARCOAL_60);
    c.text_at(left + 4.0, y, PULL_QUOTE_ATTRIBUTION, &attribution);
    y -= 24.0;
    c.divider(left, y, 216.0);
    y -= 22.0;

    let body = TextStyle::body(9.5).leading(15.0);
    let emphasis = TextStyle::new(FontRole::BodySemi, 9.5)
        .color(palette::NAVY)
        .leading(15.0);

    y = c.section_heading(y, "What is Hromada", palette::UKRAINE_BLUE);
    y = c.text_block(left, y, HROMADA_MEANING, &body) - 12.0;

    y = c.section_heading(y, "Why This Matters", palette::TERRACOTTA);
    y = c.text_block(left, y, WHY_IT_MATTERS, &body) - 4.0;
    y = c.text_block(left, y, SOLAR_SCHOOL_ARGUMENT, &emphasis) - 16.0;

    y = c.section_heading(y, "Project Spotlight", palette::CAT_SCHOOL) - 2.0;
    for card in SPOTLIGHT {
        y = c.project_card(y, card);
    }
    y -= 6.0;

    Ok(c.stat_row(y, PIPELINE_SUMMARY, &StatStyle::default()))
}

/// Process steps, fees, team, sponsor and the closing banner.
fn process_page<S: Surface + ?Sized>(c: &mut Compositor<'_, S>) -> Result<(), RenderError> {
    let left = c.left();
    let mut y = content_page(c, 2, PAGES)? - 4.0;

    y = c.section_heading(y, "How It Works", palette::UKRAINE_BLUE) - 2.0;
    for (i, step) in SHORT_STEPS.iter().enumerate() {
        y = c.numbered_step(y, i + 1, step);
    }
    y -= 6.0;

    y = fee_section(c, y, "Fee Comparison", FEE_NOTE_SHORT) - 8.0;

    y = c.section_heading(y, "Our Team", palette::NAVY);
    let name_style = TextStyle::new(FontRole::BodySemi, 9.0).color(palette::NAVY);
    let role_style = TextStyle::body(8.0).color(palette::CHARCOAL_60);
    for member in TEAM_SUMMARY {
        c.text_at(left, y, member.name, &name_style);
        let name_w = c.text_width(&format!("{}  ", member.name), name_style.role, name_style.size);
        c.text_at(left + name_w, y, member.role, &role_style);
        y -= 15.0;
    }
    y -= 2.0;

    c.text_at(left, y, FISCAL_SPONSOR_LINE, &role_style);
    y = c.sponsor_logos(y - 12.0, 26.0)?;
    c.check_overflow(y);

    let headline = format!("Browse projects at {}", SITE_URL);
    let subline = format!("Book a consultation: {}", CONTACT_EMAIL);
    c.call_to_action(
        (y - CTA_HEIGHT).max(CTA_MIN_BOTTOM),
        &CallToAction {
            headline: &headline,
            headline_size: 12.0,
            subline: &subline,
            height: CTA_HEIGHT,
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use hromada_compositor::Theme;
    use hromada_render_core::{DrawOp, RecordingSurface};
    use hromada_types::Rect;

    fn render() -> RecordingSurface {
        let assets = Assets::default();
        let theme = Theme::new(assets.fonts.clone());
        let mut surface = RecordingSurface::default();
        let mut c = Compositor::new(&mut surface, &theme, &assets.logos);
        compose(&mut c).unwrap();
        surface
    }

    #[test]
    fn first_page_opens_with_pull_quote() {
        let surface = render();
        let texts = surface.texts_on(0);
        let quote = texts
            .iter()
            .find(|(_, t)| t.starts_with('\u{201c}'))
            .expect("pull quote line");
        assert_eq!(quote.0.x, 58.0);
        assert_eq!(quote.0.y, 690.0);
        assert!(texts.iter().any(|(_, t)| *t == "Project Spotlight"));
        assert!(texts.iter().any(|(_, t)| *t == "Lutskteplo District Heating"));
        assert!(texts.iter().any(|(_, t)| *t == "1 / 2"));
    }

    #[test]
    fn second_page_carries_steps_table_and_team() {
        let surface = render();
        let texts: Vec<&str> = surface.texts_on(1).into_iter().map(|(_, t)| t).collect();
        for expected in [
            "How It Works",
            "Funds Reach the Municipality",
            "GlobalGiving",
            "Sloan Austermann",
            "2 / 2",
        ] {
            assert!(texts.contains(&expected), "missing {}", expected);
        }
        assert!(!texts.iter().any(|t| t.contains("Radist")));
    }

    #[test]
    fn banner_stays_above_bottom_limit() {
        let surface = render();
        let banner = surface.pages()[1].iter().find_map(|op| match op {
            DrawOp::RoundRect { rect, color, .. } if *color == palette::NAVY => Some(*rect),
            _ => None,
        });
        let banner: Rect = banner.expect("call-to-action banner");
        assert!(banner.y >= CTA_MIN_BOTTOM);
        assert_eq!(banner.height, CTA_HEIGHT);
    }
}
