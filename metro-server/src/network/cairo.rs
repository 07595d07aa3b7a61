//! Cairo Metro network data.
//!
//! Station order follows the track. Line 3 is modelled along its main
//! branch only (Adly Mansour to Rod El-Farag Corridor). Coordinates are
//! approximate platform locations, good enough for nearest-station lookups.

use crate::domain::{Coordinate, MetroLine};

use super::{NetworkError, StationNetwork};

const LINE_1: &[&str] = &[
    "Helwan",
    "Ain Helwan",
    "Helwan University",
    "Wadi Hof",
    "Hadayek Helwan",
    "El-Maasara",
    "Tora El-Asmant",
    "Kozzika",
    "Tora El-Balad",
    "Thakanat El-Maadi",
    "Maadi",
    "Hadayek El-Maadi",
    "Dar El-Salam",
    "El-Zahraa",
    "Mar Girgis",
    "El-Malek El-Saleh",
    "Al-Sayeda Zeinab",
    "Saad Zaghloul",
    "Sadat",
    "Gamal Abdel Nasser",
    "Orabi",
    "Al-Shohadaa",
    "Ghamra",
    "El-Demerdash",
    "Manshiet El-Sadr",
    "Kobri El-Qobba",
    "Hammamat El-Qobba",
    "Saray El-Qobba",
    "Hadayeq El-Zaitoun",
    "Helmeyet El-Zaitoun",
    "El-Matareyya",
    "Ain Shams",
    "Ezbet El-Nakhl",
    "El-Marg",
    "New El-Marg",
];

const LINE_2: &[&str] = &[
    "Shubra El-Kheima",
    "Kolleyyet El-Zeraa",
    "Mezallat",
    "Khalafawy",
    "St. Teresa",
    "Rod El-Farag",
    "Masarra",
    "Al-Shohadaa",
    "Attaba",
    "Mohamed Naguib",
    "Sadat",
    "Opera",
    "Dokki",
    "El-Bohoth",
    "Cairo University",
    "Faisal",
    "Giza",
    "Omm El-Masryeen",
    "Sakiat Mekki",
    "El-Monib",
];

const LINE_3: &[&str] = &[
    "Adly Mansour",
    "El-Haykestep",
    "Omar Ibn El-Khattab",
    "Qobaa",
    "Hesham Barakat",
    "El-Nozha",
    "Nadi El-Shams",
    "Alf Maskan",
    "Heliopolis Square",
    "Haroun",
    "Al-Ahram",
    "Koleyet El-Banat",
    "Stadium",
    "Fair Zone",
    "Abbassia",
    "Abdou Pasha",
    "El-Geish",
    "Bab El-Shaaria",
    "Attaba",
    "Gamal Abdel Nasser",
    "Maspero",
    "Safaa Hegazy",
    "Kit Kat",
    "Sudan",
    "Imbaba",
    "El-Bohy",
    "El-Qawmia",
    "Ring Road",
    "Rod El-Farag Corridor",
];

/// Interchanges, in the order route search tries them.
const INTERCHANGES: &[&str] = &["Sadat", "Al-Shohadaa", "Attaba", "Gamal Abdel Nasser"];

/// (name, latitude, longitude)
const COORDINATES: &[(&str, f64, f64)] = &[
    // Line 1
    ("Helwan", 29.8489, 31.3342),
    ("Ain Helwan", 29.8627, 31.3250),
    ("Helwan University", 29.8694, 31.3200),
    ("Wadi Hof", 29.8794, 31.3136),
    ("Hadayek Helwan", 29.8972, 31.3040),
    ("El-Maasara", 29.9061, 31.2995),
    ("Tora El-Asmant", 29.9260, 31.2875),
    ("Kozzika", 29.9362, 31.2817),
    ("Tora El-Balad", 29.9469, 31.2733),
    ("Thakanat El-Maadi", 29.9529, 31.2631),
    ("Maadi", 29.9603, 31.2577),
    ("Hadayek El-Maadi", 29.9700, 31.2506),
    ("Dar El-Salam", 29.9820, 31.2422),
    ("El-Zahraa", 29.9953, 31.2314),
    ("Mar Girgis", 30.0061, 31.2296),
    ("El-Malek El-Saleh", 30.0177, 31.2311),
    ("Al-Sayeda Zeinab", 30.0293, 31.2353),
    ("Saad Zaghloul", 30.0365, 31.2381),
    ("Sadat", 30.0444, 31.2357),
    ("Gamal Abdel Nasser", 30.0536, 31.2387),
    ("Orabi", 30.0570, 31.2422),
    ("Al-Shohadaa", 30.0611, 31.2461),
    ("Ghamra", 30.0689, 31.2646),
    ("El-Demerdash", 30.0773, 31.2779),
    ("Manshiet El-Sadr", 30.0822, 31.2876),
    ("Kobri El-Qobba", 30.0872, 31.2941),
    ("Hammamat El-Qobba", 30.0912, 31.2988),
    ("Saray El-Qobba", 30.0980, 31.3046),
    ("Hadayeq El-Zaitoun", 30.1054, 31.3104),
    ("Helmeyet El-Zaitoun", 30.1139, 31.3140),
    ("El-Matareyya", 30.1213, 31.3137),
    ("Ain Shams", 30.1311, 31.3190),
    ("Ezbet El-Nakhl", 30.1393, 31.3244),
    ("El-Marg", 30.1521, 31.3357),
    ("New El-Marg", 30.1636, 31.3383),
    // Line 2
    ("Shubra El-Kheima", 30.1224, 31.2446),
    ("Kolleyyet El-Zeraa", 30.1137, 31.2486),
    ("Mezallat", 30.1048, 31.2466),
    ("Khalafawy", 30.0981, 31.2454),
    ("St. Teresa", 30.0883, 31.2455),
    ("Rod El-Farag", 30.0805, 31.2454),
    ("Masarra", 30.0712, 31.2450),
    ("Attaba", 30.0525, 31.2469),
    ("Mohamed Naguib", 30.0455, 31.2442),
    ("Opera", 30.0420, 31.2253),
    ("Dokki", 30.0385, 31.2122),
    ("El-Bohoth", 30.0358, 31.2003),
    ("Cairo University", 30.0260, 31.2011),
    ("Faisal", 30.0173, 31.2040),
    ("Giza", 30.0107, 31.2070),
    ("Omm El-Masryeen", 30.0053, 31.2081),
    ("Sakiat Mekki", 29.9955, 31.2086),
    ("El-Monib", 29.9813, 31.2120),
    // Line 3
    ("Adly Mansour", 30.1465, 31.4213),
    ("El-Haykestep", 30.1439, 31.4047),
    ("Omar Ibn El-Khattab", 30.1404, 31.3942),
    ("Qobaa", 30.1346, 31.3837),
    ("Hesham Barakat", 30.1310, 31.3729),
    ("El-Nozha", 30.1281, 31.3600),
    ("Nadi El-Shams", 30.1222, 31.3439),
    ("Alf Maskan", 30.1180, 31.3400),
    ("Heliopolis Square", 30.1081, 31.3384),
    ("Haroun", 30.1011, 31.3330),
    ("Al-Ahram", 30.0916, 31.3264),
    ("Koleyet El-Banat", 30.0837, 31.3287),
    ("Stadium", 30.0731, 31.3171),
    ("Fair Zone", 30.0734, 31.3010),
    ("Abbassia", 30.0697, 31.2807),
    ("Abdou Pasha", 30.0648, 31.2747),
    ("El-Geish", 30.0618, 31.2670),
    ("Bab El-Shaaria", 30.0539, 31.2562),
    ("Maspero", 30.0556, 31.2321),
    ("Safaa Hegazy", 30.0625, 31.2229),
    ("Kit Kat", 30.0665, 31.2130),
    ("Sudan", 30.0701, 31.2050),
    ("Imbaba", 30.0757, 31.2075),
    ("El-Bohy", 30.0823, 31.2108),
    ("El-Qawmia", 30.0934, 31.2089),
    ("Ring Road", 30.0965, 31.1990),
    ("Rod El-Farag Corridor", 30.1018, 31.1843),
];

/// Build the Cairo Metro network.
///
/// The data is static, so this only fails if the tables above are
/// edited into an inconsistent state.
pub fn cairo_metro() -> Result<StationNetwork, NetworkError> {
    let builder = StationNetwork::builder()
        .line(MetroLine::Line1, LINE_1)
        .line(MetroLine::Line2, LINE_2)
        .line(MetroLine::Line3, LINE_3)
        .interchanges(INTERCHANGES);

    COORDINATES
        .iter()
        .fold(builder, |b, (name, lat, lon)| {
            b.coordinate(name, Coordinate::new_unchecked(*lat, *lon))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds() {
        let network = cairo_metro().unwrap();
        assert_eq!(network.stations_on(MetroLine::Line1).unwrap().len(), 35);
        assert_eq!(network.stations_on(MetroLine::Line2).unwrap().len(), 20);
        assert_eq!(network.stations_on(MetroLine::Line3).unwrap().len(), 29);
        // 84 line slots; each of the four interchanges is counted twice.
        assert_eq!(network.len(), 80);
    }

    #[test]
    fn terminals() {
        let network = cairo_metro().unwrap();
        let line1 = network.stations_on(MetroLine::Line1).unwrap();
        assert_eq!(line1.first().map(String::as_str), Some("Helwan"));
        assert_eq!(line1.last().map(String::as_str), Some("New El-Marg"));

        let line2 = network.stations_on(MetroLine::Line2).unwrap();
        assert_eq!(line2.first().map(String::as_str), Some("Shubra El-Kheima"));
        assert_eq!(line2.last().map(String::as_str), Some("El-Monib"));
    }

    #[test]
    fn interchanges_serve_two_lines() {
        let network = cairo_metro().unwrap();
        assert_eq!(network.interchanges().len(), 4);
        for name in network.interchanges() {
            assert_eq!(network.lines_for(name).len(), 2, "{name}");
        }
        assert_eq!(
            network.lines_for("Sadat"),
            [MetroLine::Line1, MetroLine::Line2]
        );
        assert_eq!(
            network.lines_for("Attaba"),
            [MetroLine::Line2, MetroLine::Line3]
        );
    }

    #[test]
    fn every_station_is_located() {
        let network = cairo_metro().unwrap();
        assert_eq!(network.stations_with_coordinates().count(), network.len());
    }

    #[test]
    fn nearest_to_tahrir_is_sadat() {
        let network = cairo_metro().unwrap();
        let tahrir = Coordinate::new(30.0445, 31.2358).unwrap();
        let nearest = network.nearest(&tahrir).unwrap();
        assert_eq!(nearest.station.name, "Sadat");
    }
}
