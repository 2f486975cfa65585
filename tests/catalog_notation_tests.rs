//! Library-level tests across the three catalogs and every notation.

use twcolors::catalog::Catalog;
use twcolors::constants::FALLBACK_MESSAGE;
use twcolors::models::{PaletteVersion, RgbColor};
use twcolors::notation::{format_color, Notation};

#[test]
fn test_every_catalog_hex_decodes() {
    for &version in PaletteVersion::all() {
        let catalog = Catalog::load(version);
        for family in catalog.families() {
            for shade in &family.shades {
                let rgb = RgbColor::from_hex(&shade.hex).unwrap_or_else(|e| {
                    panic!("{version} {}-{}: {e}", family.name, shade.label)
                });
                assert_eq!(rgb.to_hex(), shade.hex);
            }
        }
    }
}

#[test]
fn test_no_catalog_color_formats_as_fallback() {
    for &version in PaletteVersion::all() {
        let catalog = Catalog::load(version);
        for family in catalog.families() {
            for shade in &family.shades {
                for notation in Notation::ALL {
                    let value =
                        format_color(&shade.hex, notation.as_str(), &family.name, &shade.label);
                    assert_ne!(
                        value,
                        FALLBACK_MESSAGE,
                        "{version} {}-{}",
                        family.name,
                        shade.label
                    );
                }
            }
        }
    }
}

#[test]
fn test_renamed_families_share_values() {
    let v2 = Catalog::load(PaletteVersion::V2);
    let v3 = Catalog::load(PaletteVersion::V3);

    // v2 lightBlue became v3 sky; v2 coolGray became v3 gray
    for shade in ["50", "500", "900"] {
        assert_eq!(v2.hex("lightBlue", shade), v3.hex("sky", shade));
        assert_eq!(v2.hex("coolGray", shade), v3.hex("gray", shade));
    }
}

#[test]
fn test_hsl_of_grays_has_zero_hue() {
    let catalog = Catalog::load(PaletteVersion::V3);
    let neutral = catalog.family("neutral").unwrap();
    for shade in &neutral.shades {
        let value = format_color(&shade.hex, "hsl", "neutral", &shade.label);
        assert!(value.starts_with("hsl(0, 0% "), "{value}");
    }
}
