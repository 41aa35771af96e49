//! Built-in country and capital seed list for the bulk import on the
//! countries page. Imported entries are created as national countries
//! (neither destination nor affiliated); already-present countries are
//! skipped by the import loop.

/// (country, capital) pairs
pub const SEED_LOCATIONS: &[(&str, &str)] = &[
    ("Afghanistan", "Kabul"),
    ("Bangladesh", "Dhaka"),
    ("Bahrain", "Manama"),
    ("Cameroon", "Yaounde"),
    ("Egypt", "Cairo"),
    ("Ethiopia", "Addis Ababa"),
    ("Ghana", "Accra"),
    ("India", "New Delhi"),
    ("Indonesia", "Jakarta"),
    ("Jordan", "Amman"),
    ("Kenya", "Nairobi"),
    ("Kuwait", "Kuwait City"),
    ("Lebanon", "Beirut"),
    ("Malaysia", "Kuala Lumpur"),
    ("Morocco", "Rabat"),
    ("Nepal", "Kathmandu"),
    ("Nigeria", "Abuja"),
    ("Oman", "Muscat"),
    ("Pakistan", "Islamabad"),
    ("Philippines", "Manila"),
    ("Qatar", "Doha"),
    ("Saudi Arabia", "Riyadh"),
    ("Senegal", "Dakar"),
    ("Sierra Leone", "Freetown"),
    ("Somalia", "Mogadishu"),
    ("Sri Lanka", "Colombo"),
    ("Sudan", "Khartoum"),
    ("Tanzania", "Dodoma"),
    ("Uganda", "Kampala"),
    ("United Arab Emirates", "Abu Dhabi"),
    ("Yemen", "Sanaa"),
];
