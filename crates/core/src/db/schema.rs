diesel::table! {
    customers (id) {
        id -> BigInt,
        name -> Text,
        birthday -> Nullable<Text>,
        email -> Nullable<Text>,
        phone -> Nullable<Text>,
        address -> Nullable<Text>,
        contact_method -> Nullable<Text>,
    }
}
