/// Canonical style name → narrative blurb.
pub(super) const STYLE_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "cayetano",
        "Una evolución del estilo cayetano mezclado con el bohemio-chic de los 70, buscando un aspecto de lujo heredado y relajado.",
    ),
    (
        "pijo",
        "El estilo preppy clásico con toques modernos, elegancia casual y sofisticación atemporal.",
    ),
    (
        "urbano/streetwear",
        "La esencia del streetwear urbano con influencias del hip-hop y la cultura skate contemporánea.",
    ),
    (
        "boho-chic",
        "Espíritu bohemio con toques vintage y artesanales, libre y romántico con influencias de los 70.",
    ),
    (
        "sporty/gorpcore",
        "Funcionalidad outdoor meets fashion, con prendas técnicas y estética deportiva de alto rendimiento.",
    ),
    (
        "minimalista/scandi",
        "Líneas limpias, paleta neutra y diseño escandinavo minimalista con enfoque en la calidad.",
    ),
    (
        "y2k/grunge",
        "Nostalgia de los 2000 con edge grunge, rebelde y auténtico con toques subversivos.",
    ),
    (
        "old money",
        "Elegancia heredada y discreta, calidad sobre tendencias con estética clásica intergeneracional.",
    ),
    (
        "quiet luxury",
        "Lujo sin logos, calidad superior y diseño minimalista que habla por sí mismo.",
    ),
    (
        "coquette",
        "Feminidad romántica con lazos, volantes y tonos suaves que celebran la delicadeza.",
    ),
    (
        "dark academia",
        "Inspiración literaria y universitaria clásica con paleta oscura y toques intelectuales.",
    ),
    (
        "cyberpunk/techwear",
        "Estética futurista con prendas técnicas, tejidos reflectantes y funcionalidad urbana avanzada.",
    ),
];
