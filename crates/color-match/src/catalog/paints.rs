//! Builtin paint catalog: Golden Heavy Body artist acrylics.
//!
//! Hex values approximate a full-strength drawdown of each color on white.

use super::entry::PaintColor;

pub static GOLDEN_HEAVY_BODY_ACRYLICS: &[PaintColor] = &[
    // Whites and blacks
    PaintColor::new("Titanium White", "#F4F3EE"),
    PaintColor::new("Zinc White", "#EDEDE8"),
    PaintColor::new("Titan Buff", "#E6DCC3"),
    PaintColor::new("Carbon Black", "#1B1B1B"),
    PaintColor::new("Mars Black", "#222120"),
    PaintColor::new("Bone Black", "#2A2725"),

    // Neutrals
    PaintColor::new("Neutral Gray N2", "#3B3B3B"),
    PaintColor::new("Neutral Gray N5", "#777777"),
    PaintColor::new("Neutral Gray N8", "#C4C4C2"),
    PaintColor::new("Paynes Gray", "#3C4550"),

    // Yellows
    PaintColor::new("Hansa Yellow Light", "#F7E43A"),
    PaintColor::new("Hansa Yellow Medium", "#F6CF16"),
    PaintColor::new("Hansa Yellow Opaque", "#F3C318"),
    PaintColor::new("Cadmium Yellow Light", "#F8D80D"),
    PaintColor::new("Cadmium Yellow Medium", "#F6B800"),
    PaintColor::new("Cadmium Yellow Dark", "#F29F05"),
    PaintColor::new("Diarylide Yellow", "#EDA413"),
    PaintColor::new("Nickel Azo Yellow", "#C99A2E"),
    PaintColor::new("Naples Yellow Hue", "#EBCB83"),

    // Oranges
    PaintColor::new("Cadmium Orange", "#EE6A1F"),
    PaintColor::new("Pyrrole Orange", "#E8531F"),
    PaintColor::new("Vat Orange", "#E1622A"),

    // Reds
    PaintColor::new("Cadmium Red Light", "#E23A24"),
    PaintColor::new("Cadmium Red Medium", "#C9252A"),
    PaintColor::new("Cadmium Red Dark", "#9E1C24"),
    PaintColor::new("Pyrrole Red", "#CC2229"),
    PaintColor::new("Pyrrole Red Light", "#DD3426"),
    PaintColor::new("Naphthol Red Light", "#D8302C"),
    PaintColor::new("Naphthol Red Medium", "#BD2231"),
    PaintColor::new("Quinacridone Crimson", "#8C1C33"),
    PaintColor::new("Alizarin Crimson Hue", "#7C1F2C"),
    PaintColor::new("Permanent Maroon", "#6A2030"),

    // Magentas and violets
    PaintColor::new("Quinacridone Magenta", "#9B2452"),
    PaintColor::new("Quinacridone Violet", "#7D2147"),
    PaintColor::new("Medium Magenta", "#B3336F"),
    PaintColor::new("Primary Magenta", "#C0176B"),
    PaintColor::new("Cobalt Violet Hue", "#8A4F9E"),
    PaintColor::new("Dioxazine Purple", "#3B1F4D"),
    PaintColor::new("Ultramarine Violet", "#4B3A7A"),

    // Blues
    PaintColor::new("Ultramarine Blue", "#2A3A8C"),
    PaintColor::new("Light Ultramarine Blue", "#6C86C4"),
    PaintColor::new("Cobalt Blue", "#1F4EA0"),
    PaintColor::new("Cerulean Blue Chromium", "#1F76B6"),
    PaintColor::new("Phthalo Blue (Green Shade)", "#10305A"),
    PaintColor::new("Phthalo Blue (Red Shade)", "#182C63"),
    PaintColor::new("Prussian Blue Hue", "#1B2B3F"),
    PaintColor::new("Manganese Blue Hue", "#1E8DB8"),
    PaintColor::new("Primary Cyan", "#0088C6"),
    PaintColor::new("Indanthrene Blue", "#1F2A55"),

    // Teals and greens
    PaintColor::new("Teal", "#00777A"),
    PaintColor::new("Cobalt Teal", "#3FB8AF"),
    PaintColor::new("Phthalo Green (Blue Shade)", "#0B3D33"),
    PaintColor::new("Phthalo Green (Yellow Shade)", "#0D5C3F"),
    PaintColor::new("Permanent Green Light", "#3E9B3A"),
    PaintColor::new("Chromium Oxide Green", "#5B7344"),
    PaintColor::new("Hookers Green Hue", "#2D4A2F"),
    PaintColor::new("Sap Green Hue", "#4B5B2A"),
    PaintColor::new("Green Gold", "#8F8A1E"),
    PaintColor::new("Terre Verte Hue", "#5E7562"),

    // Earths
    PaintColor::new("Yellow Ochre", "#C58E2F"),
    PaintColor::new("Yellow Oxide", "#CC922C"),
    PaintColor::new("Raw Sienna", "#B07132"),
    PaintColor::new("Burnt Sienna", "#8A3E24"),
    PaintColor::new("Red Oxide", "#8E3425"),
    PaintColor::new("Transparent Red Iron Oxide", "#7A2E1B"),
    PaintColor::new("Raw Umber", "#4E3D2D"),
    PaintColor::new("Burnt Umber", "#4A2F23"),
    PaintColor::new("Van Dyke Brown Hue", "#3A2A20"),
];
