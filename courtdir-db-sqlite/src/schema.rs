///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venues (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        slug -> Text,
        state -> Text,
        state_slug -> Text,
        city -> Text,
        address -> Nullable<Text>,
        lat -> Double,
        lng -> Double,
        indoor_outdoor -> Nullable<Text>,
        price_type -> Nullable<Text>,
        num_courts -> Nullable<Integer>,
        description -> Nullable<Text>,
        image_url -> Nullable<Text>,
        lighting -> Bool,
        featured -> Bool,
        // Lowercase text, see `VenueStatus`
        status -> Text,
    }
}
