/// Canonical material name → description.
pub(super) const MATERIAL_DESCRIPTIONS: &[(&str, &str)] = &[
    ("algodon", "fibra natural suave, transpirable y cómoda para uso diario"),
    ("lino", "fibra natural ligera y fresca, ideal para climas cálidos"),
    ("lana", "fibra natural cálida y aislante, perfecta para el invierno"),
    ("seda", "fibra natural lujosa, suave y con brillo elegante"),
    ("cachemira", "lana ultra suave y lujosa procedente de cabras de cachemira"),
    ("cuero", "material duradero y elegante de origen animal"),
    ("denim", "tejido resistente de algodón, clásico para jeans"),
    ("terciopelo", "tejido suave con textura afelpada y aspecto lujoso"),
    ("saten", "tejido brillante y liso con acabado elegante"),
    ("jersey", "tejido elástico y cómodo, ideal para prendas casuales"),
    ("tweed", "tejido de lana rugoso con textura característica"),
    ("pana", "tejido con acanalado vertical distintivo y tacto suave"),
    ("poliester", "fibra sintética duradera y fácil de mantener"),
    ("nylon", "fibra sintética resistente, ligera y de secado rápido"),
    ("viscosa", "fibra semi-sintética suave con caída fluida"),
    ("modal", "fibra suave y transpirable derivada de la celulosa"),
    ("spandex", "fibra elástica que aporta flexibilidad y ajuste"),
    ("lana merino", "lana fina y suave de alta calidad"),
    ("algodon organico", "algodón cultivado sin pesticidas ni químicos"),
    ("gamuza", "cuero con acabado aterciopelado y suave"),
    ("elastano", "fibra elástica sintética altamente flexible"),
    ("lycra", "fibra elástica que proporciona comodidad y movimiento"),
    ("rayon", "fibra artificial suave con aspecto similar a la seda"),
    ("acrilico", "fibra sintética que imita la lana, cálida y ligera"),
    ("organza", "tejido fino, transparente y con cuerpo"),
    ("tul", "tejido de malla ligero y delicado"),
    ("encaje", "tejido decorativo con patrones calados"),
    ("gasa", "tejido ligero, transparente y fluido"),
    ("felpa", "tejido suave con pelo rizado en la superficie"),
    ("polar", "tejido sintético cálido y esponjoso"),
    ("nylon ripstop", "nylon reforzado resistente a rasgaduras"),
    ("gore-tex", "membrana impermeable y transpirable de alta tecnología"),
    ("tejido reflectante", "material con propiedades reflectantes para visibilidad"),
    ("mesh", "tejido de malla transpirable para ventilación"),
    ("neopreno", "material sintético aislante usado en prendas deportivas"),
];
