// src/services/seed_data.rs
// DOCUMENTATION: Sample places inserted by POST /places/seed

use crate::models::Place;

#[allow(clippy::too_many_arguments)]
fn place(
    name: &str,
    city: &str,
    state: &str,
    category: &str,
    description: &str,
    tags: &[&str],
    (latitude, longitude): (f64, f64),
    website: &str,
) -> Place {
    Place {
        name: name.to_string(),
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        latitude: Some(latitude),
        longitude: Some(longitude),
        website: Some(website.to_string()),
    }
}

/// The fixed seed set: ten well-known German destinations
/// Regions without a single city carry an empty city string.
pub fn sample_places() -> Vec<Place> {
    vec![
        place(
            "Brandenburg Gate",
            "Berlin",
            "Berlin",
            "landmark",
            "18th-century neoclassical monument and iconic symbol of Berlin.",
            &["history", "architecture", "city"],
            (52.516275, 13.377704),
            "https://www.visitberlin.de/en/brandenburg-gate",
        ),
        place(
            "Neuschwanstein Castle",
            "Schwangau",
            "Bavaria",
            "castle",
            "Fairy-tale 19th-century Romanesque Revival castle commissioned by King Ludwig II.",
            &["castle", "mountains", "romantic road"],
            (47.5576, 10.7498),
            "https://www.neuschwanstein.de/englisch/tourist/index.htm",
        ),
        place(
            "Cologne Cathedral",
            "Cologne",
            "North Rhine-Westphalia",
            "cathedral",
            "UNESCO-listed Gothic cathedral with twin spires and a rich history.",
            &["unesco", "gothic", "church"],
            (50.9413, 6.9583),
            "https://www.koelner-dom.de/",
        ),
        place(
            "Miniatur Wunderland",
            "Hamburg",
            "Hamburg",
            "museum",
            "World's largest model railway exhibition with intricate miniature worlds.",
            &["museum", "family", "model"],
            (53.5437, 9.9884),
            "https://www.miniatur-wunderland.com/",
        ),
        place(
            "Black Forest",
            "",
            "Baden-Württemberg",
            "nature",
            "Mountainous region known for dense forests, cuckoo clocks, and scenic trails.",
            &["hiking", "nature", "scenic"],
            (48.1430, 8.2096),
            "https://www.schwarzwald-tourismus.info/",
        ),
        place(
            "Heidelberg Castle",
            "Heidelberg",
            "Baden-Württemberg",
            "castle",
            "Picturesque Renaissance castle ruins overlooking the old town.",
            &["castle", "ruins", "river"],
            (49.4106, 8.7153),
            "https://www.schloss-heidelberg.de/",
        ),
        place(
            "Zugspitze",
            "Garmisch-Partenkirchen",
            "Bavaria",
            "mountain",
            "Germany's highest peak with panoramic views and year-round activities.",
            &["alps", "skiing", "views"],
            (47.4210, 10.9840),
            "https://zugspitze.de/",
        ),
        place(
            "Museum Island",
            "Berlin",
            "Berlin",
            "museum",
            "UNESCO ensemble of five world-renowned museums on the Spree.",
            &["unesco", "art", "history"],
            (52.5211, 13.3969),
            "https://www.smb.museum/en/museums-institutions/museum-island-berlin/home/",
        ),
        place(
            "Sanssouci Palace",
            "Potsdam",
            "Brandenburg",
            "palace",
            "Rococo summer palace of Frederick the Great with terraced gardens.",
            &["palace", "gardens", "rococo"],
            (52.4036, 13.0397),
            "https://www.spsg.de/",
        ),
        place(
            "Saxon Switzerland National Park",
            "",
            "Saxony",
            "nature",
            "Dramatic sandstone formations and hiking trails along the Elbe.",
            &["national park", "hiking", "sandstone"],
            (50.9289, 14.2366),
            "https://www.saechsische-schweiz.de/en/",
        ),
    ]
}
