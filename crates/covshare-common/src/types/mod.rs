mod color;
mod core;
mod dimension;

pub use self::core::*;
pub use color::*;
pub use dimension::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(110.0, 70.0));
        assert!(!r.contains(9.9, 30.0));
        assert!(!r.contains(50.0, 70.1));
    }

    #[test]
    fn extent_along_and_across() {
        let e = Extent::new(300.0, 200.0);
        assert_eq!(e.along(Alignment::Horizontal), 300.0);
        assert_eq!(e.across(Alignment::Horizontal), 200.0);
        assert_eq!(e.along(Alignment::Vertical), 200.0);
        assert_eq!(e.across(Alignment::Vertical), 300.0);
    }

    #[test]
    fn alignment_serializes_lowercase() {
        let json = serde_json::to_string(&Alignment::Vertical).unwrap();
        assert_eq!(json, "\"vertical\"");
        let parsed: Alignment = serde_json::from_str("\"horizontal\"").unwrap();
        assert_eq!(parsed, Alignment::Horizontal);
    }

    #[test]
    fn alignment_picks_axis_coordinate() {
        assert_eq!(Alignment::Horizontal.pick(3.0, 7.0), 3.0);
        assert_eq!(Alignment::Vertical.pick(3.0, 7.0), 7.0);
    }

    #[test]
    fn dimension_parses_units() {
        assert_eq!("50%".parse::<Dimension>().unwrap(), Dimension::Percent(50.0));
        assert_eq!(
            "120px".parse::<Dimension>().unwrap(),
            Dimension::Pixels(120.0)
        );
        assert_eq!("12.5".parse::<Dimension>().unwrap(), Dimension::Pixels(12.5));
        assert_eq!(" auto ".parse::<Dimension>().unwrap(), Dimension::Auto);
        assert_eq!("".parse::<Dimension>().unwrap(), Dimension::Auto);
    }

    #[test]
    fn dimension_rejects_garbage() {
        assert!("12em".parse::<Dimension>().is_err());
        assert!("-5px".parse::<Dimension>().is_err());
        assert!("px".parse::<Dimension>().is_err());
    }

    #[test]
    fn dimension_display() {
        assert_eq!(Dimension::Pixels(145.0).to_string(), "145px");
        assert_eq!(Dimension::Percent(33.333).to_string(), "33.33%");
        assert_eq!(Dimension::Pixels(12.5).to_string(), "12.5px");
        assert_eq!(Dimension::Auto.to_string(), "auto");
    }

    #[test]
    fn dimension_to_pixels() {
        // Percentages apply to the available space, capped at max.
        assert_eq!(Dimension::Percent(50.0).to_pixels(300.0, 290.0), 145.0);
        assert_eq!(Dimension::Percent(200.0).to_pixels(300.0, 290.0), 300.0);
        assert_eq!(Dimension::Pixels(500.0).to_pixels(300.0, 290.0), 300.0);
        assert_eq!(Dimension::Pixels(80.0).to_pixels(300.0, 290.0), 80.0);
        assert_eq!(Dimension::Auto.to_pixels(300.0, 290.0), 0.0);
    }

    #[test]
    fn dimension_serde_as_string() {
        let size = PaneSize::new(Dimension::Pixels(10.0), Dimension::Percent(100.0));
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, r#"{"width":"10px","height":"100%"}"#);
        let back: PaneSize = serde_json::from_str(&json).unwrap();
        assert_eq!(back, size);
        assert!(serde_json::from_str::<Dimension>("\"1vw\"").is_err());
    }

    #[test]
    fn color_from_hex() {
        assert_eq!(
            Color::from_hex("#ff8800").unwrap(),
            Color::from_rgba(255, 136, 0, 255)
        );
        assert_eq!(
            Color::from_hex("ff880080").unwrap(),
            Color::from_rgba(255, 136, 0, 128)
        );
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn color_from_name() {
        assert_eq!(Color::from_name("Black"), Some(Color::BLACK));
        assert_eq!(
            Color::from_name("transparent"),
            Some(Color::from_rgba(0, 0, 0, 0))
        );
        assert!(Color::from_name("blurple").is_none());
    }

    #[test]
    fn color_to_hex() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }
}
