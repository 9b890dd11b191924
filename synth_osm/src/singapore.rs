//! The shipped data set: real Singapore geography, sketched by hand from
//! known coordinates. Waypoints are sparse on purpose; the pipeline densifies
//! them into plausible-looking geometry.

use geom::LonLat;

use crate::model::{CityMap, Expressway, Junction, Park, Road, Zone};

pub fn city_map() -> CityMap {
    CityMap {
        expressways: expressways(),
        arterials: arterials(),
        junctions: junctions(),
        parks: parks(),
        industrial_zones: industrial_zones(),
        building_centers: building_centers(),
        cycleways: cycleways(),
        signal_stride: 15,
    }
}

fn pts(raw: &[(f64, f64)]) -> Vec<LonLat> {
    raw.iter().map(|(lon, lat)| LonLat::new(*lon, *lat)).collect()
}

fn expressways() -> Vec<Expressway> {
    vec![
        // Pan-Island Expressway, east-west across central Singapore
        Expressway::new(
            "PIE",
            4,
            pts(&[
                (103.637, 1.332),
                (103.660, 1.342),
                (103.680, 1.352),
                (103.700, 1.358),
                (103.720, 1.361),
                (103.740, 1.360),
                (103.760, 1.356),
                (103.775, 1.350),
                (103.790, 1.348),
                (103.810, 1.345),
                (103.830, 1.340),
                (103.850, 1.338),
                (103.870, 1.336),
                (103.890, 1.333),
                (103.910, 1.330),
                (103.930, 1.328),
                (103.950, 1.335),
                (103.960, 1.340),
            ]),
        ),
        // Ayer Rajah Expressway, along the south coast
        Expressway::new(
            "AYE",
            4,
            pts(&[
                (103.637, 1.312),
                (103.660, 1.305),
                (103.680, 1.298),
                (103.700, 1.292),
                (103.720, 1.288),
                (103.740, 1.285),
                (103.760, 1.283),
                (103.775, 1.282),
                (103.790, 1.283),
                (103.800, 1.285),
                (103.810, 1.288),
                (103.825, 1.290),
                (103.840, 1.291),
                (103.855, 1.289),
            ]),
        ),
        // Central Expressway, north-south through the center
        Expressway::new(
            "CTE",
            4,
            pts(&[
                (103.840, 1.260),
                (103.839, 1.275),
                (103.838, 1.290),
                (103.837, 1.305),
                (103.836, 1.318),
                (103.835, 1.330),
                (103.834, 1.342),
                (103.833, 1.355),
                (103.832, 1.368),
                (103.831, 1.380),
                (103.830, 1.392),
                (103.828, 1.405),
            ]),
        ),
        // East Coast Parkway
        Expressway::new(
            "ECP",
            4,
            pts(&[
                (103.855, 1.289),
                (103.870, 1.293),
                (103.885, 1.296),
                (103.900, 1.298),
                (103.915, 1.300),
                (103.930, 1.302),
                (103.945, 1.305),
                (103.960, 1.310),
                (103.975, 1.315),
            ]),
        ),
        // Bukit Timah Expressway, northwest to center
        Expressway::new(
            "BKE",
            4,
            pts(&[
                (103.770, 1.430),
                (103.775, 1.420),
                (103.778, 1.410),
                (103.780, 1.400),
                (103.785, 1.390),
                (103.790, 1.380),
                (103.800, 1.370),
                (103.810, 1.362),
                (103.820, 1.355),
                (103.830, 1.350),
            ]),
        ),
        // Seletar Expressway, east-west in the north
        Expressway::new(
            "SLE",
            4,
            pts(&[
                (103.750, 1.398),
                (103.770, 1.400),
                (103.790, 1.402),
                (103.810, 1.403),
                (103.830, 1.402),
                (103.850, 1.400),
                (103.870, 1.398),
                (103.890, 1.396),
                (103.910, 1.394),
            ]),
        ),
        // Tampines Expressway, northeast
        Expressway::new(
            "TPE",
            4,
            pts(&[
                (103.910, 1.394),
                (103.920, 1.380),
                (103.930, 1.370),
                (103.940, 1.360),
                (103.950, 1.350),
                (103.955, 1.340),
                (103.960, 1.330),
            ]),
        ),
        // Kallang-Paya Lebar Expressway, underground/east
        Expressway::new(
            "KPE",
            3,
            pts(&[
                (103.870, 1.310),
                (103.875, 1.320),
                (103.880, 1.330),
                (103.885, 1.340),
                (103.890, 1.350),
                (103.895, 1.360),
                (103.900, 1.370),
                (103.905, 1.380),
            ]),
        ),
        // Marina Coastal Expressway, connects AYE to ECP
        Expressway::new(
            "MCE",
            3,
            pts(&[
                (103.830, 1.265),
                (103.840, 1.268),
                (103.850, 1.272),
                (103.858, 1.278),
                (103.862, 1.285),
                (103.858, 1.290),
            ]),
        ),
    ]
}

fn arterials() -> Vec<Road> {
    vec![
        Road::new(
            "Orchard Road",
            pts(&[
                (103.826, 1.300),
                (103.832, 1.302),
                (103.838, 1.304),
                (103.844, 1.304),
            ]),
        ),
        Road::new(
            "Bukit Timah Road",
            pts(&[
                (103.840, 1.305),
                (103.835, 1.315),
                (103.830, 1.325),
                (103.822, 1.340),
                (103.815, 1.350),
                (103.805, 1.362),
            ]),
        ),
        Road::new(
            "Upper Thomson Road",
            pts(&[
                (103.832, 1.350),
                (103.830, 1.365),
                (103.828, 1.380),
                (103.826, 1.395),
                (103.824, 1.410),
            ]),
        ),
        Road::new(
            "Ang Mo Kio Ave 1",
            pts(&[
                (103.840, 1.365),
                (103.845, 1.370),
                (103.850, 1.375),
                (103.855, 1.380),
            ]),
        ),
        Road::new(
            "Tampines Ave",
            pts(&[
                (103.940, 1.345),
                (103.945, 1.350),
                (103.950, 1.355),
                (103.955, 1.348),
            ]),
        ),
        Road::new(
            "Jurong Town Hall Road",
            pts(&[(103.740, 1.330), (103.745, 1.335), (103.748, 1.340)]),
        ),
        Road::new(
            "Clementi Road",
            pts(&[(103.760, 1.320), (103.770, 1.318), (103.780, 1.315)]),
        ),
        Road::new(
            "Nicoll Highway",
            pts(&[(103.860, 1.298), (103.868, 1.300), (103.875, 1.303)]),
        ),
        Road::new(
            "Victoria Street",
            pts(&[(103.852, 1.296), (103.856, 1.298), (103.860, 1.300)]),
        ),
        Road::new(
            "Serangoon Road",
            pts(&[
                (103.853, 1.305),
                (103.858, 1.315),
                (103.862, 1.325),
                (103.865, 1.335),
            ]),
        ),
        Road::new(
            "Geylang Road",
            pts(&[
                (103.870, 1.313),
                (103.878, 1.315),
                (103.886, 1.318),
                (103.894, 1.320),
            ]),
        ),
        Road::new(
            "Toa Payoh Lorong",
            pts(&[(103.845, 1.332), (103.850, 1.338), (103.855, 1.342)]),
        ),
        Road::new(
            "Woodlands Ave",
            pts(&[(103.785, 1.430), (103.790, 1.435), (103.795, 1.438)]),
        ),
        Road::new(
            "Yishun Ave",
            pts(&[(103.830, 1.420), (103.835, 1.425), (103.840, 1.428)]),
        ),
        Road::new(
            "Pasir Ris Drive",
            pts(&[(103.950, 1.370), (103.955, 1.373), (103.960, 1.375)]),
        ),
        Road::new(
            "Bedok North Road",
            pts(&[(103.925, 1.332), (103.930, 1.335), (103.935, 1.338)]),
        ),
        Road::new(
            "Commonwealth Ave",
            pts(&[(103.790, 1.302), (103.800, 1.300), (103.810, 1.298)]),
        ),
        Road::new(
            "Alexandra Road",
            pts(&[(103.800, 1.288), (103.808, 1.286), (103.815, 1.284)]),
        ),
        Road::new(
            "Holland Road",
            pts(&[(103.790, 1.310), (103.795, 1.315), (103.800, 1.320)]),
        ),
        Road::new(
            "Adam Road",
            pts(&[(103.815, 1.328), (103.820, 1.332), (103.825, 1.335)]),
        ),
        Road::new(
            "Dunearn Road",
            pts(&[(103.800, 1.325), (103.808, 1.328), (103.815, 1.330)]),
        ),
        Road::new(
            "Lornie Road",
            pts(&[(103.825, 1.335), (103.828, 1.340), (103.830, 1.345)]),
        ),
        Road::new(
            "Sims Avenue",
            pts(&[
                (103.875, 1.315),
                (103.885, 1.318),
                (103.895, 1.320),
                (103.905, 1.322),
            ]),
        ),
        Road::new(
            "Changi Road",
            pts(&[(103.895, 1.320), (103.910, 1.324), (103.925, 1.328)]),
        ),
        Road::new(
            "Upper East Coast Road",
            pts(&[(103.920, 1.310), (103.935, 1.312), (103.950, 1.315)]),
        ),
        Road::new(
            "Hougang Ave",
            pts(&[(103.880, 1.360), (103.885, 1.365), (103.890, 1.368)]),
        ),
        Road::new(
            "Punggol Road",
            pts(&[(103.900, 1.390), (103.908, 1.395), (103.915, 1.398)]),
        ),
        Road::new(
            "West Coast Highway",
            pts(&[(103.720, 1.280), (103.735, 1.278), (103.750, 1.276)]),
        ),
        Road::new(
            "Pioneer Road",
            pts(&[(103.695, 1.320), (103.702, 1.318), (103.710, 1.315)]),
        ),
        Road::new(
            "Mandai Road",
            pts(&[(103.780, 1.395), (103.785, 1.400), (103.790, 1.408)]),
        ),
    ]
}

fn junctions() -> Vec<Junction> {
    [
        (103.845, 1.304, "Orchard/Scotts"),
        (103.838, 1.302, "Orchard/Tanglin"),
        (103.851, 1.300, "Orchard/Bras Basah"),
        (103.836, 1.330, "PIE/BKE"),
        (103.836, 1.345, "Lornie/Adam"),
        (103.860, 1.310, "Nicoll/Kallang"),
        (103.870, 1.313, "Geylang/Sims"),
        (103.852, 1.338, "Toa Payoh/CTE"),
        (103.840, 1.365, "AMK Ave/CTE"),
        (103.830, 1.392, "SLE/CTE"),
        (103.790, 1.348, "PIE/BKE North"),
        (103.910, 1.330, "PIE/Tampines"),
        (103.895, 1.355, "Hougang/Serangoon"),
        (103.745, 1.335, "PIE/Jurong"),
        (103.770, 1.318, "Clementi/AYE"),
        (103.800, 1.300, "Commonwealth/AYE"),
        (103.855, 1.289, "AYE/ECP"),
        (103.940, 1.345, "Tampines Hub"),
        (103.900, 1.370, "TPE/KPE"),
        (103.785, 1.430, "Woodlands Centre"),
        (103.830, 1.420, "Yishun Central"),
        (103.950, 1.370, "Pasir Ris Central"),
        (103.820, 1.355, "Upper Thomson/PIE"),
        (103.808, 1.328, "Dunearn/Adam"),
        (103.880, 1.340, "Serangoon/Hougang"),
        (103.920, 1.310, "ECP/Bedok"),
        (103.710, 1.315, "Pioneer/AYE"),
        (103.862, 1.325, "Serangoon Mid"),
        (103.905, 1.322, "Sims/Changi"),
    ]
    .into_iter()
    .map(|(lon, lat, name)| Junction {
        name: name.to_string(),
        pt: LonLat::new(lon, lat),
    })
    .collect()
}

fn parks() -> Vec<Park> {
    vec![
        Park::area(
            "East Coast Park",
            pts(&[
                (103.870, 1.298),
                (103.880, 1.296),
                (103.900, 1.296),
                (103.920, 1.298),
                (103.940, 1.300),
                (103.950, 1.302),
                (103.950, 1.306),
                (103.940, 1.305),
                (103.920, 1.303),
                (103.900, 1.301),
                (103.880, 1.300),
                (103.870, 1.302),
            ]),
        ),
        Park::area(
            "MacRitchie Reservoir",
            pts(&[
                (103.822, 1.340),
                (103.830, 1.338),
                (103.838, 1.340),
                (103.840, 1.348),
                (103.838, 1.355),
                (103.830, 1.358),
                (103.822, 1.355),
                (103.820, 1.348),
            ]),
        ),
        Park::area(
            "Botanic Gardens",
            pts(&[
                (103.813, 1.312),
                (103.818, 1.311),
                (103.821, 1.314),
                (103.820, 1.320),
                (103.816, 1.322),
                (103.812, 1.318),
            ]),
        ),
        Park::area(
            "Gardens by the Bay",
            pts(&[
                (103.860, 1.278),
                (103.870, 1.277),
                (103.873, 1.282),
                (103.870, 1.287),
                (103.862, 1.288),
                (103.858, 1.284),
            ]),
        ),
        Park::area(
            "Bishan-Ang Mo Kio Park",
            pts(&[
                (103.840, 1.357),
                (103.848, 1.356),
                (103.850, 1.362),
                (103.847, 1.368),
                (103.840, 1.370),
                (103.837, 1.364),
            ]),
        ),
        Park::area(
            "Bedok Reservoir Park",
            pts(&[
                (103.925, 1.337),
                (103.932, 1.336),
                (103.936, 1.340),
                (103.934, 1.345),
                (103.928, 1.346),
                (103.924, 1.342),
            ]),
        ),
        Park::area(
            "Pasir Ris Park",
            pts(&[
                (103.945, 1.378),
                (103.955, 1.377),
                (103.960, 1.380),
                (103.958, 1.386),
                (103.950, 1.387),
                (103.944, 1.383),
            ]),
        ),
        Park::area(
            "West Coast Park",
            pts(&[
                (103.758, 1.278),
                (103.768, 1.276),
                (103.772, 1.280),
                (103.770, 1.284),
                (103.762, 1.285),
                (103.757, 1.282),
            ]),
        ),
        Park::area(
            "Bukit Timah Nature Reserve",
            pts(&[
                (103.772, 1.350),
                (103.782, 1.348),
                (103.788, 1.355),
                (103.786, 1.365),
                (103.778, 1.368),
                (103.770, 1.362),
            ]),
        ),
        Park::area(
            "Central Catchment Nature Reserve",
            pts(&[
                (103.800, 1.355),
                (103.815, 1.352),
                (103.825, 1.358),
                (103.828, 1.372),
                (103.820, 1.382),
                (103.808, 1.385),
                (103.798, 1.378),
                (103.795, 1.368),
            ]),
        ),
        Park::area(
            "Sungei Buloh Wetland Reserve",
            pts(&[
                (103.725, 1.440),
                (103.740, 1.438),
                (103.745, 1.445),
                (103.738, 1.450),
                (103.728, 1.448),
            ]),
        ),
        Park::area(
            "Punggol Waterway Park",
            pts(&[
                (103.900, 1.404),
                (103.910, 1.402),
                (103.915, 1.408),
                (103.910, 1.412),
                (103.902, 1.410),
            ]),
        ),
        Park::area(
            "Kallang Riverside Park",
            pts(&[
                (103.862, 1.305),
                (103.870, 1.303),
                (103.875, 1.308),
                (103.872, 1.312),
                (103.865, 1.310),
            ]),
        ),
        Park::area(
            "Fort Canning Park",
            pts(&[
                (103.845, 1.293),
                (103.850, 1.292),
                (103.852, 1.296),
                (103.849, 1.298),
                (103.844, 1.297),
            ]),
        ),
        Park::area(
            "Kent Ridge Park",
            pts(&[
                (103.788, 1.282),
                (103.796, 1.280),
                (103.800, 1.284),
                (103.796, 1.289),
                (103.790, 1.288),
            ]),
        ),
        Park::area(
            "Southern Ridges",
            pts(&[
                (103.798, 1.275),
                (103.808, 1.272),
                (103.818, 1.274),
                (103.820, 1.279),
                (103.815, 1.283),
                (103.805, 1.282),
                (103.798, 1.280),
            ]),
        ),
        Park::area(
            "Lower Peirce Reservoir",
            pts(&[
                (103.820, 1.370),
                (103.828, 1.368),
                (103.832, 1.374),
                (103.828, 1.380),
                (103.820, 1.378),
            ]),
        ),
        Park::area(
            "Coney Island",
            pts(&[
                (103.920, 1.406),
                (103.932, 1.404),
                (103.940, 1.407),
                (103.938, 1.412),
                (103.928, 1.413),
                (103.920, 1.410),
            ]),
        ),
        // Linear park connectors: sketched as a spine, buffered to a strip
        Park::corridor(
            "Kallang Park Connector",
            pts(&[
                (103.861, 1.308),
                (103.856, 1.318),
                (103.851, 1.328),
                (103.846, 1.340),
            ]),
            0.0008,
        ),
        Park::corridor(
            "Ulu Pandan Park Connector",
            pts(&[
                (103.781, 1.311),
                (103.786, 1.316),
                (103.791, 1.321),
                (103.796, 1.329),
            ]),
            0.0008,
        ),
    ]
}

fn industrial_zones() -> Vec<Zone> {
    vec![
        Zone::new(
            "Jurong Industrial Estate",
            pts(&[
                (103.690, 1.310),
                (103.720, 1.308),
                (103.725, 1.320),
                (103.720, 1.335),
                (103.705, 1.338),
                (103.690, 1.330),
            ]),
        ),
        Zone::new(
            "Tuas Industrial",
            pts(&[
                (103.620, 1.310),
                (103.650, 1.308),
                (103.655, 1.320),
                (103.650, 1.335),
                (103.630, 1.338),
                (103.618, 1.325),
            ]),
        ),
        Zone::new(
            "Woodlands Industrial",
            pts(&[
                (103.770, 1.432),
                (103.785, 1.430),
                (103.790, 1.438),
                (103.785, 1.445),
                (103.772, 1.442),
            ]),
        ),
        Zone::new(
            "Changi Business Park",
            pts(&[
                (103.960, 1.330),
                (103.975, 1.328),
                (103.980, 1.338),
                (103.972, 1.342),
                (103.960, 1.340),
            ]),
        ),
        Zone::new(
            "Paya Lebar Industrial",
            pts(&[
                (103.885, 1.340),
                (103.895, 1.338),
                (103.900, 1.345),
                (103.895, 1.350),
                (103.885, 1.348),
            ]),
        ),
        Zone::new(
            "Kallang/Kolam Ayer Industrial",
            pts(&[
                (103.868, 1.318),
                (103.878, 1.316),
                (103.882, 1.324),
                (103.876, 1.328),
                (103.868, 1.326),
            ]),
        ),
        Zone::new(
            "Senoko Industrial",
            pts(&[
                (103.795, 1.445),
                (103.810, 1.443),
                (103.815, 1.450),
                (103.808, 1.455),
                (103.795, 1.452),
            ]),
        ),
        Zone::new(
            "Tanjong Kling Industrial",
            pts(&[
                (103.728, 1.278),
                (103.740, 1.276),
                (103.745, 1.282),
                (103.738, 1.286),
                (103.728, 1.284),
            ]),
        ),
    ]
}

fn building_centers() -> Vec<LonLat> {
    // CBD towers, then HDB clusters by town
    pts(&[
        // CBD
        (103.850, 1.285),
        (103.852, 1.287),
        (103.854, 1.289),
        (103.848, 1.283),
        (103.846, 1.281),
        (103.856, 1.291),
        (103.853, 1.293),
        (103.849, 1.295),
        (103.851, 1.297),
        (103.847, 1.299),
        (103.843, 1.297),
        (103.845, 1.301),
        // Toa Payoh
        (103.845, 1.332),
        (103.847, 1.334),
        (103.849, 1.336),
        (103.843, 1.335),
        (103.846, 1.338),
        // Ang Mo Kio
        (103.842, 1.368),
        (103.845, 1.370),
        (103.848, 1.372),
        (103.840, 1.372),
        (103.843, 1.374),
        // Bedok
        (103.925, 1.325),
        (103.928, 1.327),
        (103.930, 1.330),
        (103.923, 1.328),
        (103.926, 1.332),
        // Tampines
        (103.942, 1.350),
        (103.945, 1.352),
        (103.948, 1.354),
        // Jurong East
        (103.742, 1.332),
        (103.745, 1.334),
        (103.748, 1.336),
        // Woodlands
        (103.785, 1.435),
        (103.788, 1.437),
        (103.790, 1.433),
        // Yishun
        (103.832, 1.422),
        (103.835, 1.424),
        (103.837, 1.426),
        // Punggol
        (103.905, 1.398),
        (103.908, 1.400),
        (103.910, 1.396),
        // Bukit Merah
        (103.820, 1.282),
        (103.822, 1.284),
        (103.818, 1.286),
        // Queenstown
        (103.798, 1.294),
        (103.800, 1.296),
        (103.796, 1.298),
    ])
}

fn cycleways() -> Vec<Road> {
    vec![
        Road::new(
            "Eastern Coastal PCN",
            pts(&[
                (103.870, 1.300),
                (103.890, 1.302),
                (103.910, 1.304),
                (103.930, 1.306),
                (103.950, 1.310),
                (103.960, 1.318),
            ]),
        ),
        Road::new(
            "Kallang PCN",
            pts(&[
                (103.860, 1.308),
                (103.855, 1.318),
                (103.850, 1.328),
                (103.845, 1.340),
                (103.842, 1.350),
            ]),
        ),
        Road::new(
            "Ulu Pandan PCN",
            pts(&[
                (103.780, 1.310),
                (103.785, 1.315),
                (103.790, 1.320),
                (103.795, 1.328),
                (103.800, 1.335),
            ]),
        ),
        Road::new(
            "Punggol PCN",
            pts(&[
                (103.895, 1.398),
                (103.905, 1.402),
                (103.915, 1.406),
                (103.925, 1.408),
                (103.935, 1.406),
            ]),
        ),
        Road::new(
            "Northern Explorer PCN",
            pts(&[
                (103.775, 1.435),
                (103.790, 1.438),
                (103.805, 1.440),
                (103.820, 1.438),
                (103.835, 1.435),
            ]),
        ),
    ]
}
