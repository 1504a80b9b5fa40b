/// Canonical garment name → description.
///
/// Declaration order is the tie-break for partial matches: the first entry
/// whose key contains, or is contained in, the looked-up name wins.
pub(super) const GARMENT_DESCRIPTIONS: &[(&str, &str)] = &[
    // Prendas superiores
    ("camisa", "prenda de vestir con cuello y botones, versátil para looks formales y casuales"),
    ("camiseta", "prenda básica de manga corta, esencial en cualquier guardarropa"),
    ("blusa", "prenda elegante y femenina, ideal para ocasiones especiales"),
    ("polo", "camiseta con cuello y botones, equilibrio perfecto entre casual y formal"),
    ("sueter", "prenda de punto cálida y acogedora para temporadas frías"),
    ("jersey", "prenda de punto ligera, perfecta para el entretiempo"),
    ("chaleco", "prenda sin mangas que añade una capa extra de estilo"),
    ("blazer", "chaqueta estructurada que aporta elegancia a cualquier outfit"),
    ("chaqueta", "prenda exterior versátil para múltiples ocasiones"),
    ("abrigo", "prenda larga y abrigada para proteger del frío"),
    ("cardigan", "chaqueta de punto abierta, cómoda y estilosa"),
    ("sudadera", "prenda deportiva cómoda, perfecta para looks relajados"),
    ("hoodie", "sudadera con capucha, icónica del streetwear"),
    ("crop top", "prenda corta que deja al descubierto el abdomen, moderna y atrevida"),
    ("top", "prenda superior ligera y versátil"),
    ("bodysuit", "prenda ajustada de una pieza, perfecta para estilizar la figura"),
    // Prendas inferiores
    ("pantalon", "prenda que cubre las piernas, disponible en múltiples estilos"),
    ("pantalones", "prenda que cubre las piernas, disponible en múltiples estilos"),
    ("jeans", "pantalón de mezclilla resistente y atemporal"),
    ("vaqueros", "pantalón de denim clásico, básico del guardarropa"),
    ("chinos", "pantalones de algodón elegantes y versátiles"),
    ("shorts", "pantalón corto ideal para climas cálidos"),
    ("bermudas", "pantalón corto hasta la rodilla, cómodo y casual"),
    ("falda", "prenda que cae desde la cintura, femenina y elegante"),
    ("minifalda", "falda corta y juvenil, perfecta para looks atrevidos"),
    ("falda midi", "falda de largo medio, elegante y sofisticada"),
    ("falda larga", "falda que llega hasta los tobillos, fluida y romántica"),
    ("leggings", "pantalón ajustado elástico, cómodo y versátil"),
    ("joggers", "pantalón deportivo con puños en los tobillos"),
    // Vestidos y monos
    ("vestido", "prenda de una pieza femenina y elegante"),
    ("vestido corto", "vestido por encima de la rodilla, juvenil y fresco"),
    ("vestido largo", "vestido que llega hasta los pies, elegante y sofisticado"),
    ("vestido midi", "vestido de largo medio, versátil y favorecedor"),
    ("mono", "prenda de una pieza con pantalón, moderna y práctica"),
    ("jumpsuit", "mono elegante de una pieza, perfecto para eventos"),
    ("maxi dress", "vestido largo y fluido, ideal para verano"),
    // Calzado
    ("zapatillas", "calzado deportivo cómodo y casual"),
    ("sneakers", "zapatillas urbanas modernas y versátiles"),
    ("botas", "calzado que cubre el tobillo o más arriba"),
    ("botines", "botas cortas que llegan al tobillo"),
    ("sandalias", "calzado abierto ideal para climas cálidos"),
    ("tacones", "zapatos con tacón elevado, elegantes y femeninos"),
    ("zapatos", "calzado cerrado para diversas ocasiones"),
    ("mocasines", "zapatos sin cordones elegantes y cómodos"),
    ("oxford", "zapato clásico con cordones, formal y sofisticado"),
    ("deportivas", "calzado deportivo para actividades físicas"),
    // Accesorios
    ("gorra", "accesorio para la cabeza, casual y deportivo"),
    ("sombrero", "accesorio elegante para proteger del sol"),
    ("bufanda", "accesorio de cuello que aporta calidez y estilo"),
    ("panuelo", "accesorio versátil que se puede usar de múltiples formas"),
    ("cinturon", "accesorio que define la cintura y añade estructura"),
    ("bolso", "accesorio práctico para llevar pertenencias"),
    ("mochila", "bolsa que se lleva en la espalda, práctica y casual"),
    ("rinonera", "bolsa pequeña que se lleva en la cintura, tendencia actual"),
    ("gafas de sol", "accesorio protector con estilo"),
    ("reloj", "accesorio funcional que añade elegancia"),
    ("collar", "joya que se lleva en el cuello"),
    ("pulsera", "joya que se lleva en la muñeca"),
    ("pendientes", "joyas que se llevan en las orejas"),
    ("aretes", "joyas que adornan las orejas"),
    // Prendas técnicas y deportivas
    ("chaleco multipockets", "chaleco funcional con múltiples bolsillos, estilo utility"),
    ("plumas tecnico", "chaqueta acolchada técnica, ligera y cálida"),
    ("chubasquero oversized", "impermeable holgado de estilo urbano moderno"),
    ("bermudas cargo", "shorts con bolsillos laterales, estilo funcional"),
    ("parka", "abrigo largo con capucha, resistente al clima"),
    ("windbreaker", "chaqueta cortavientos ligera y funcional"),
    ("chaqueta bomber", "chaqueta corta con puños elásticos, icónica del streetwear"),
    ("anorak", "chaqueta impermeable con capucha, deportiva y funcional"),
];
