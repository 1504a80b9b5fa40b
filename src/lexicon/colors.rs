/// Canonical color name → hex code.
pub(super) const COLOR_HEX: &[(&str, &str)] = &[
    // Neutros cálidos
    ("crema", "#FFFDD0"),
    ("beige", "#F5F5DC"),
    ("arena", "#C2B280"),
    ("camel", "#C19A6B"),
    ("topo", "#483C32"),
    ("champan", "#F7E7CE"),
    ("marfil", "#FFFFF0"),
    ("vainilla", "#F3E5AB"),
    ("nude", "#E3BC9A"),
    // Blancos, grises y negros
    ("blanco", "#FFFFFF"),
    ("gris", "#808080"),
    ("gris claro", "#D3D3D3"),
    ("gris oscuro", "#404040"),
    ("negro", "#000000"),
    ("antracita", "#2F4F4F"),
    ("carbon", "#36454F"),
    ("platino", "#E5E4E2"),
    ("plata", "#C0C0C0"),
    ("perla", "#EAE0C8"),
    // Marrones y metálicos
    ("marron", "#8B4513"),
    ("chocolate", "#7B3F00"),
    ("cafe", "#6F4E37"),
    ("terracota", "#E2725B"),
    ("cobre", "#B87333"),
    ("bronce", "#CD7F32"),
    ("cognac", "#9A463D"),
    // Rojos y rosas
    ("rojo", "#FF0000"),
    ("rojo oscuro", "#8B0000"),
    ("carmesi", "#DC143C"),
    ("borgona", "#800020"),
    ("burgundy", "#800020"),
    ("vino", "#722F37"),
    ("burdeos", "#800020"),
    ("rosa", "#FFC0CB"),
    ("rosa palo", "#FFD1DC"),
    ("rosa viejo", "#C08081"),
    ("fucsia", "#FF00FF"),
    ("magenta", "#FF00FF"),
    ("coral", "#FF7F50"),
    ("salmon", "#FA8072"),
    // Azules
    ("azul", "#0000FF"),
    ("azul marino", "#000080"),
    ("navy", "#001F3F"),
    ("azul real", "#4169E1"),
    ("azul cielo", "#87CEEB"),
    ("celeste", "#87CEEB"),
    ("turquesa", "#40E0D0"),
    ("aguamarina", "#7FFFD4"),
    ("cobalto", "#0047AB"),
    ("azul petroleo", "#1C4966"),
    ("indigo", "#4B0082"),
    ("azul acero", "#4682B4"),
    // Verdes
    ("verde", "#00FF00"),
    ("verde oscuro", "#006400"),
    ("verde militar", "#4B5320"),
    ("verde oliva", "#808000"),
    ("oliva", "#556B2F"),
    ("olive", "#808000"),
    ("verde bosque", "#228B22"),
    ("esmeralda", "#50C878"),
    ("menta", "#98FF98"),
    ("verde agua", "#66CDAA"),
    ("jade", "#00A86B"),
    ("musgo", "#8A9A5B"),
    // Amarillos y naranjas
    ("amarillo", "#FFFF00"),
    ("oro", "#FFD700"),
    ("mostaza", "#FFDB58"),
    ("limon", "#FFF700"),
    ("naranja", "#FFA500"),
    ("naranja quemado", "#CC5500"),
    ("mandarina", "#F28500"),
    ("calabaza", "#FF7518"),
    // Morados
    ("morado", "#800080"),
    ("violeta", "#8B00FF"),
    ("purpura", "#800080"),
    ("lavanda", "#E6E6FA"),
    ("lila", "#C8A2C8"),
    ("ciruela", "#8E4585"),
    ("berenjena", "#614051"),
    ("malva", "#E0B0FF"),
    // Tierras
    ("dorado", "#FFD700"),
    ("caqui", "#C3B091"),
    ("mostaza oscuro", "#E1AD01"),
    ("tostado", "#D2B48C"),
    ("arena oscuro", "#967969"),
    ("sepia", "#704214"),
];
