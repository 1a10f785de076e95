//! Builtin print-ink catalog: a subset of the coated (C) solid ink guide,
//! grouped by hue family.
//!
//! Two entries share a hex value (PMS 327 C and PMS 7710 C); ties resolve to
//! the earlier one.

use super::entry::InkColor;

pub static PANTONE_COLORS: &[InkColor] = &[
    // Yellows
    InkColor::new("PMS 100 C", "Yellow", "#F6E200"),
    InkColor::new("PMS 102 C", "Yellow", "#FCE300"),
    InkColor::new("PMS 107 C", "Yellow", "#F9E526"),
    InkColor::new("PMS 108 C", "Yellow", "#FEDB00"),
    InkColor::new("PMS 109 C", "Yellow", "#FFD100"),
    InkColor::new("PMS 113 C", "Yellow", "#FBD760"),
    InkColor::new("PMS 116 C", "Yellow", "#FFCD00"),
    InkColor::new("PMS 123 C", "Yellow", "#FFC72C"),
    InkColor::new("PMS 130 C", "Yellow-Orange", "#F2A900"),
    InkColor::new("PMS 3955 C", "Neon Yellow", "#F3F315"),
    InkColor::new("PMS 7405 C", "Muted Yellow", "#E2B73E"),

    // Oranges
    InkColor::new("PMS 137 C", "Orange", "#FFA300"),
    InkColor::new("PMS 144 C", "Orange", "#ED8B00"),
    InkColor::new("PMS 151 C", "Orange", "#FF8200"),
    InkColor::new("PMS 158 C", "Orange", "#E87722"),
    InkColor::new("PMS 165 C", "Orange", "#FF671F"),
    InkColor::new("PMS 1665 C", "Orange", "#DC4405"),
    InkColor::new("PMS 172 C", "Red-Orange", "#FA4616"),
    InkColor::new("PMS 716 C", "Bright Orange", "#EA7600"),

    // Reds
    InkColor::new("PMS 179 C", "Red", "#E03C31"),
    InkColor::new("PMS 1788 C", "Red", "#EE2737"),
    InkColor::new("PMS 185 C", "Red", "#E4002B"),
    InkColor::new("PMS 186 C", "Red", "#C8102E"),
    InkColor::new("PMS 199 C", "Red", "#D50032"),
    InkColor::new("PMS 200 C", "Red", "#BA0C2F"),
    InkColor::new("PMS 201 C", "Red", "#9D2235"),
    InkColor::new("PMS 202 C", "Dark Red", "#862633"),
    InkColor::new("PMS 485 C", "Red", "#DA291C"),
    InkColor::new("PMS 703 C", "Pastel Red", "#A64B4F"),
    InkColor::new("PMS 7621 C", "Brick Red", "#AB2328"),

    // Pinks / Magentas
    InkColor::new("PMS 212 C", "Pink", "#F55274"),
    InkColor::new("PMS 219 C", "Rubine Red", "#DA1884"),
    InkColor::new("PMS 226 C", "Magenta", "#D70075"),
    InkColor::new("PMS 232 C", "Rhodamine Red", "#EE3C96"),
    InkColor::new("PMS Process Magenta C", "Magenta", "#EC008C"),
    InkColor::new("PMS 707 C", "Light Pink", "#F9A3A9"),
    InkColor::new("PMS 7425 C", "Deep Pink", "#B04A6C"),

    // Purples
    InkColor::new("PMS 239 C", "Purple", "#D8248E"),
    InkColor::new("PMS 259 C", "Purple", "#6D2077"),
    InkColor::new("PMS 266 C", "Purple", "#753BBD"),
    InkColor::new("PMS 268 C", "Purple", "#582C83"),
    InkColor::new("PMS 273 C", "Purple", "#38215B"),
    InkColor::new("PMS 513 C", "Violet", "#94459A"),
    InkColor::new("PMS 7671 C", "Indigo Purple", "#5B4F95"),

    // Blues
    InkColor::new("PMS 280 C", "Navy Blue", "#012169"),
    InkColor::new("PMS 286 C", "Royal Blue", "#0033A0"),
    InkColor::new("PMS 293 C", "Blue", "#003DA5"),
    InkColor::new("PMS 299 C", "Sky Blue", "#00A3E0"),
    InkColor::new("PMS 300 C", "Blue", "#005EB8"),
    InkColor::new("PMS 306 C", "Process Blue", "#00B5E2"),
    InkColor::new("PMS 312 C", "Blue", "#009CDE"),
    InkColor::new("PMS 533 C", "Navy", "#1F2A44"),
    InkColor::new("PMS 541 C", "Blue", "#003C71"),
    InkColor::new("PMS 647 C", "Blue", "#22557F"),
    InkColor::new("PMS 279 C", "Cornflower", "#418FDE"),
    InkColor::new("PMS 7455 C", "Periwinkle", "#455898"),
    InkColor::new("PMS Process Cyan C", "Cyan", "#009EE3"),

    // Teals / Aquas
    InkColor::new("PMS 320 C", "Teal", "#009DA5"),
    InkColor::new("PMS 327 C", "Teal", "#00857D"),
    InkColor::new("PMS 3258 C", "Mint", "#49C5B1"),
    InkColor::new("PMS 7710 C", "Dark Teal", "#00857D"),

    // Greens
    InkColor::new("PMS 347 C", "Green", "#009A44"),
    InkColor::new("PMS 354 C", "Bright Green", "#00B140"),
    InkColor::new("PMS 361 C", "Green", "#43B02A"),
    InkColor::new("PMS 368 C", "Lime Green", "#78BE20"),
    InkColor::new("PMS 375 C", "Green", "#97D700"),
    InkColor::new("PMS 382 C", "Yellow-Green", "#BAD80A"),
    InkColor::new("PMS 340 C", "Teal Green", "#00965E"),
    InkColor::new("PMS 342 C", "Forest Green", "#006A4E"),
    InkColor::new("PMS 350 C", "Deep Green", "#2C5234"),
    InkColor::new("PMS 7482 C", "Light Green", "#00AD5F"),
    InkColor::new("PMS 7488 C", "Grass Green", "#6CC24A"),
    InkColor::new("PMS 7738 C", "Dark Forest", "#1A4B2D"),
    InkColor::new("PMS 357 C", "Olive Drab", "#21412D"),
    InkColor::new("PMS 575 C", "Olive", "#67823A"),
    InkColor::new("PMS 583 C", "Chartreuse", "#A2B025"),
    InkColor::new("PMS 555 C", "Dark Green", "#206C49"),

    // Browns / Tans / Earth
    InkColor::new("PMS 448 C", "Drab", "#4A412A"),
    InkColor::new("PMS 469 C", "Brown", "#623412"),
    InkColor::new("PMS 476 C", "Dark Brown", "#4E3629"),
    InkColor::new("PMS 729 C", "Tan", "#BFA07A"),
    InkColor::new("PMS 7502 C", "Beige", "#CEB888"),
    InkColor::new("PMS 7532 C", "Taupe", "#5B4C3A"),
    InkColor::new("PMS 4625 C", "Espresso", "#4F2C1D"),

    // Grays / Blacks / Metallics
    InkColor::new("PMS 420 C", "Light Gray", "#C7C9C7"),
    InkColor::new("PMS 421 C", "Gray", "#B2B4B2"),
    InkColor::new("PMS 424 C", "Gray", "#707372"),
    InkColor::new("PMS 425 C", "Dark Gray", "#54585A"),
    InkColor::new("PMS Cool Gray 1 C", "Cool Gray", "#D9D9D6"),
    InkColor::new("PMS Cool Gray 5 C", "Cool Gray", "#B1B3B3"),
    InkColor::new("PMS Cool Gray 11 C", "Cool Gray", "#53565A"),
    InkColor::new("PMS Warm Gray 1 C", "Warm Gray", "#D7D2CB"),
    InkColor::new("PMS Warm Gray 5 C", "Warm Gray", "#ACA39A"),
    InkColor::new("PMS Warm Gray 11 C", "Warm Gray", "#6E6259"),
    InkColor::new("PMS Process Black C", "Black", "#2E2925"),
    InkColor::new("PMS Black 6 C", "Black", "#101820"),
    InkColor::new("PMS 871 C", "Gold", "#84754E"),
    InkColor::new("PMS 877 C", "Silver", "#8A8D8F"),

    // More specific shades
    InkColor::new("PMS 5625 C", "Sage", "#6E8574"),
    InkColor::new("PMS 7545 C", "Slate", "#425563"),
    InkColor::new("PMS 7605 C", "Sand", "#D6C4B1"),
    InkColor::new("PMS 2001 C", "Neon Orange", "#FFA35F"),
];
