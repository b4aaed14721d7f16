//! Hand-curated restaurant lists bundled with the daemon.
//!
//! `LAGOS` covers the Lagos LGAs in depth; `SEED` is the smaller multi-state
//! list (Lagos and Abuja). Both overlap on Lagos, so callers that merge both
//! should skip Lagos entries from `SEED`.

use crate::restaurant::RawRestaurant;

/// One curated listing
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub lga: &'static str,
    pub location: &'static str,
    pub rating: f64,
    pub cuisine: &'static str,
    pub specialties: &'static [&'static str],
}

#[allow(clippy::too_many_arguments)]
const fn seed(
    name: &'static str,
    city: &'static str,
    state: &'static str,
    lga: &'static str,
    location: &'static str,
    rating: f64,
    cuisine: &'static str,
    specialties: &'static [&'static str],
) -> SeedEntry {
    SeedEntry {
        name,
        city,
        state,
        lga,
        location,
        rating,
        cuisine,
        specialties,
    }
}

impl SeedEntry {
    pub fn to_raw(&self) -> RawRestaurant {
        RawRestaurant::new(self.name)
            .with_place(self.city, self.state, self.lga)
            .with_location(self.location)
            .with_rating(self.rating)
            .with_cuisine(self.cuisine, self.specialties)
    }
}

/// The curated Lagos list
pub fn lagos_restaurants() -> Vec<RawRestaurant> {
    LAGOS.iter().map(SeedEntry::to_raw).collect()
}

/// The curated multi-state list
pub fn seed_restaurants() -> Vec<RawRestaurant> {
    SEED.iter().map(SeedEntry::to_raw).collect()
}

pub static LAGOS: &[SeedEntry] = &[
    seed("Mega Chicken", "Ikeja", "Lagos", "Ikeja", "Multiple locations in Ikeja", 4.36, "Fast Food", &["Fried Chicken", "Burgers"]),
    seed("Chicken Republic", "Ikeja", "Lagos", "Ikeja", "Computer Village, Ikeja", 4.2, "Fast Food", &["Chicken", "Rice"]),
    seed("Sweet Sensation", "Allen Avenue", "Lagos", "Ikeja", "Allen Avenue, Ikeja", 4.0, "Fast Food", &["Pastries", "Meals"]),
    seed("Mr Biggs", "Alausa", "Lagos", "Ikeja", "Alausa, Ikeja", 3.9, "Fast Food", &["Burgers", "Meals"]),
    seed("Tantalizers", "Ikeja", "Lagos", "Ikeja", "Ikeja", 3.9, "Fast Food", &["Local & Continental"]),
    seed("King Glab Cuisine", "Ikeja GRA", "Lagos", "Ikeja", "Ikeja GRA", 4.36, "Nigerian", &["Jollof Rice", "Local Dishes"]),
    seed("Ajisafe", "Ikeja", "Lagos", "Ikeja", "16 Ajisafe St, Ikeja GRA", 4.34, "Nigerian", &["Jollof Rice"]),
    seed("Labule", "Ikeja", "Lagos", "Ikeja", "Multiple Ikeja locations", 4.19, "Nigerian", &["African Dishes"]),
    seed("Belefull", "Ikeja", "Lagos", "Ikeja", "Ikeja", 4.19, "Nigerian", &["Jollof Rice"]),
    seed("Mama Put", "Ogba", "Lagos", "Ikeja", "Ogba, Ikeja", 4.1, "Nigerian", &["Local Dishes"]),
    seed("Yellow Chilli", "Ikeja", "Lagos", "Ikeja", "Ikeja City Mall", 4.2, "Indian", &["Indian Cuisine"]),
    seed("Molabat Kitchen", "Lekki", "Lagos", "Eti-Osa", "14 Agungi Ajiran Rd, Lekki", 4.47, "Nigerian", &["Jollof Rice"]),
    seed("Foodies", "Lekki", "Lagos", "Eti-Osa", "Lekki Phase I", 4.28, "Nigerian", &["Jollof Rice"]),
    seed("Yakoyo", "Lekki", "Lagos", "Eti-Osa", "Lekki Phase I", 4.19, "Nigerian", &["Jollof Rice"]),
    seed("Dominos Pizza", "Lekki", "Lagos", "Eti-Osa", "Lekki Phase 1", 4.1, "Italian", &["Pizza"]),
    seed("Debonairs Pizza", "Lekki", "Lagos", "Eti-Osa", "Admiralty Way, Lekki", 4.3, "Italian", &["Pizza"]),
    seed("KFC", "Lekki", "Lagos", "Eti-Osa", "Lekki Toll Gate", 4.0, "Fast Food", &["Chicken"]),
    seed("Johnny Rockets", "Lekki", "Lagos", "Eti-Osa", "Admiralty Mall, Lekki", 4.4, "American", &["Burgers", "Shakes"]),
    seed("Spice Route", "Lekki", "Lagos", "Eti-Osa", "Lekki Phase 1", 4.3, "Indian", &["Indian Cuisine"]),
    seed("Bottles", "Lekki", "Lagos", "Eti-Osa", "Lekki", 4.2, "Continental", &["Grills", "Seafood"]),
    seed("Amoke Oge", "Ikoyi", "Lagos", "Eti-Osa", "Balawa, Ikoyi", 4.34, "Nigerian", &["Jollof Rice", "Local Dishes"]),
    seed("The Place", "Victoria Island", "Lagos", "Eti-Osa", "Victoria Island", 4.67, "Continental", &["International Cuisine"]),
    seed("Burger King", "Victoria Island", "Lagos", "Eti-Osa", "Adeola Odeku, VI", 4.2, "Fast Food", &["Burgers"]),
    seed("Hard Rock Cafe", "Victoria Island", "Lagos", "Eti-Osa", "Victoria Island", 4.5, "American", &["Burgers", "Grills"]),
    seed("Nok by Alara", "Victoria Island", "Lagos", "Eti-Osa", "Victoria Island", 4.6, "Contemporary Nigerian", &["Modern Nigerian"]),
    seed("Cactus", "Victoria Island", "Lagos", "Eti-Osa", "VI", 4.3, "Mexican", &["Tacos", "Mexican Food"]),
    seed("Shiro", "Victoria Island", "Lagos", "Eti-Osa", "Victoria Island", 4.4, "Asian", &["Asian Fusion"]),
    seed("Chicken Republic Ajah", "Ajah", "Lagos", "Eti-Osa", "Ajah", 4.1, "Fast Food", &["Chicken"]),
    seed("Sweet Sensation Ajah", "Ajah", "Lagos", "Eti-Osa", "Ajah", 3.9, "Fast Food", &["Pastries"]),
    seed("HNH Restaurant", "Yaba", "Lagos", "Lagos Mainland", "27 Fola Agoro St, Igbobi Road", 4.58, "Nigerian", &["Jollof Rice"]),
    seed("Iya Moria", "Yaba", "Lagos", "Lagos Mainland", "DLI Road, Lagos", 4.36, "Nigerian", &["Jollof Rice", "Local Dishes"]),
    seed("Mama Cass", "Yaba", "Lagos", "Lagos Mainland", "Herbert Macaulay Way, Yaba", 4.1, "Nigerian", &["Local Dishes"]),
    seed("Chicken Republic Yaba", "Yaba", "Lagos", "Lagos Mainland", "Yaba", 4.1, "Fast Food", &["Chicken"]),
    seed("De Marquee", "Yaba", "Lagos", "Lagos Mainland", "Yaba", 4.2, "Nigerian", &["Local Dishes"]),
    seed("Bukka Hut", "Surulere", "Lagos", "Surulere", "Surulere", 4.2, "Nigerian", &["Local Dishes"]),
    seed("Kilimanjaro", "Surulere", "Lagos", "Surulere", "Adeniran Ogunsanya, Surulere", 4.3, "Continental", &["Grills", "Continental"]),
    seed("Chicken Republic Surulere", "Surulere", "Lagos", "Surulere", "Surulere", 4.0, "Fast Food", &["Chicken"]),
    seed("Mama Dee", "Surulere", "Lagos", "Surulere", "Surulere", 4.1, "Nigerian", &["Jollof Rice"]),
    seed("Ofada Boy", "Surulere", "Lagos", "Surulere", "Surulere", 4.2, "Nigerian", &["Ofada Rice"]),
    seed("Bungalow Restaurant", "Gbagada", "Lagos", "Kosofe", "Gbagada Expressway", 4.3, "Continental", &["Grills", "International"]),
    seed("Yellow Chilli Maryland", "Maryland", "Lagos", "Kosofe", "Maryland Mall", 4.2, "Indian", &["Indian Cuisine"]),
    seed("Chicken Republic Maryland", "Maryland", "Lagos", "Kosofe", "Maryland", 4.1, "Fast Food", &["Chicken"]),
    seed("Mama Ebo", "Gbagada", "Lagos", "Kosofe", "Gbagada", 4.0, "Nigerian", &["Local Dishes"]),
    seed("Obalende Suya", "Ogudu", "Lagos", "Kosofe", "Ogudu", 4.2, "Nigerian", &["Suya"]),
    seed("Tantalizers Oshodi", "Oshodi", "Lagos", "Oshodi-Isolo", "Oshodi", 3.9, "Fast Food", &["Local & Continental"]),
    seed("Chicken Republic Isolo", "Isolo", "Lagos", "Oshodi-Isolo", "Isolo", 4.0, "Fast Food", &["Chicken"]),
    seed("Mama Cass Isolo", "Isolo", "Lagos", "Oshodi-Isolo", "Isolo", 4.0, "Nigerian", &["Local Dishes"]),
    seed("Genesis Restaurant", "Festac", "Lagos", "Amuwo-Odofin", "Festac Town", 4.1, "Continental", &["Grills"]),
    seed("Chicken Republic Festac", "Festac", "Lagos", "Amuwo-Odofin", "Festac", 4.0, "Fast Food", &["Chicken"]),
    seed("Mama Put Festac", "Festac", "Lagos", "Amuwo-Odofin", "Festac", 4.1, "Nigerian", &["Local Dishes"]),
    seed("Chicken Republic Egbeda", "Egbeda", "Lagos", "Alimosho", "Egbeda", 4.0, "Fast Food", &["Chicken"]),
    seed("Mama Cass Ikotun", "Ikotun", "Lagos", "Alimosho", "Ikotun", 3.9, "Nigerian", &["Local Dishes"]),
    seed("De Angelo", "Egbeda", "Lagos", "Alimosho", "Egbeda", 4.1, "Nigerian", &["Jollof Rice"]),
    seed("Chicken Republic Apapa", "Apapa", "Lagos", "Apapa", "Apapa", 3.9, "Fast Food", &["Chicken"]),
    seed("The Wharf", "Apapa", "Lagos", "Apapa", "Apapa", 4.0, "Seafood", &["Seafood"]),
    seed("Chicken Republic Somolu", "Somolu", "Lagos", "Somolu", "Somolu", 3.9, "Fast Food", &["Chicken"]),
    seed("Mama Dee Palmgrove", "Palmgrove", "Lagos", "Somolu", "Palmgrove", 4.0, "Nigerian", &["Jollof Rice"]),
    seed("Coldstone Creamery", "Lekki", "Lagos", "Eti-Osa", "Multiple locations", 4.3, "Dessert", &["Ice Cream"]),
    seed("Shoprite Food Court", "Ikeja", "Lagos", "Ikeja", "Shoprite Ikeja", 4.0, "Various", &["Multiple Cuisines"]),
    seed("Spur", "Victoria Island", "Lagos", "Eti-Osa", "VI", 4.2, "Steakhouse", &["Steaks", "Burgers"]),
    seed("Ocean Basket", "Victoria Island", "Lagos", "Eti-Osa", "Victoria Island", 4.3, "Seafood", &["Seafood"]),
];

pub static SEED: &[SeedEntry] = &[
    seed("Mega Chicken", "Ikeja", "Lagos", "Ikeja", "Multiple locations in Ikeja", 4.36, "Fast Food", &["Fried Chicken", "Burgers"]),
    seed("King Glab Cuisine", "Ikeja", "Lagos", "Ikeja", "Ikeja GRA", 4.36, "Nigerian", &["Jollof Rice", "Local Dishes"]),
    seed("Ajisafe", "Ikeja", "Lagos", "Ikeja", "16 Ajisafe St, Ikeja GRA", 4.34, "Nigerian", &["Jollof Rice"]),
    seed("Labule", "Ikeja", "Lagos", "Ikeja", "Multiple Ikeja locations", 4.19, "Nigerian", &["African Dishes"]),
    seed("Belefull", "Ikeja", "Lagos", "Ikeja", "Ikeja", 4.19, "Nigerian", &["Jollof Rice"]),
    seed("Sweet Sensation", "Ikeja", "Lagos", "Ikeja", "Allen Avenue, Ikeja", 4.0, "Fast Food", &["Pastries", "Meals"]),
    seed("Chicken Republic", "Ikeja", "Lagos", "Ikeja", "Computer Village, Ikeja", 4.2, "Fast Food", &["Chicken", "Rice"]),
    seed("Mr Biggs", "Ikeja", "Lagos", "Ikeja", "Alausa, Ikeja", 3.9, "Fast Food", &["Burgers", "Meals"]),
    seed("Molabat Kitchen", "Lekki", "Lagos", "Eti-Osa", "14 Agungi Ajiran Rd, Lekki Peninsula II", 4.47, "Nigerian", &["Jollof Rice"]),
    seed("Amoke Oge", "Ikoyi", "Lagos", "Eti-Osa", "Balawa, Ikoyi, Surulere", 4.34, "Nigerian", &["Jollof Rice", "Local Dishes"]),
    seed("Foodies", "Lekki", "Lagos", "Eti-Osa", "Lekki Phase I", 4.28, "Nigerian", &["Jollof Rice"]),
    seed("Yakoyo", "Lekki", "Lagos", "Eti-Osa", "Lekki Phase I", 4.19, "Nigerian", &["Jollof Rice"]),
    seed("The Place", "Lagos", "Lagos", "Eti-Osa", "Victoria Island & Other locations", 4.67, "Continental", &["International Cuisine"]),
    seed("Dominos Pizza", "Lekki", "Lagos", "Eti-Osa", "Lekki Phase 1", 4.1, "Italian", &["Pizza"]),
    seed("Debonairs Pizza", "Victoria Island", "Lagos", "Eti-Osa", "Admiralty Way, Lekki", 4.3, "Italian", &["Pizza"]),
    seed("KFC", "Lekki", "Lagos", "Eti-Osa", "Lekki Toll Gate", 4.0, "Fast Food", &["Chicken"]),
    seed("Burger King", "Victoria Island", "Lagos", "Eti-Osa", "Adeola Odeku, VI", 4.2, "Fast Food", &["Burgers"]),
    seed("Johnny Rockets", "Lekki", "Lagos", "Eti-Osa", "Admiralty Mall, Lekki", 4.4, "American", &["Burgers", "Shakes"]),
    seed("HNH Restaurant", "Yaba", "Lagos", "Lagos Mainland", "27 Fola Agoro St, Igbobi Road", 4.58, "Nigerian", &["Jollof Rice"]),
    seed("Iya Moria", "Yaba", "Lagos", "Lagos Mainland", "DLI Road, Lagos", 4.36, "Nigerian", &["Jollof Rice", "Local Dishes"]),
    seed("Mama Cass", "Yaba", "Lagos", "Lagos Mainland", "Herbert Macaulay Way, Yaba", 4.1, "Nigerian", &["Local Dishes"]),
    seed("Bukka Hut", "Surulere", "Lagos", "Surulere", "Surulere", 4.2, "Nigerian", &["Local Dishes"]),
    seed("Kilimanjaro", "Surulere", "Lagos", "Surulere", "Adeniran Ogunsanya, Surulere", 4.3, "Continental", &["Grills", "Continental"]),
    seed("Bungalow Restaurant", "Gbagada", "Lagos", "Kosofe", "Gbagada Expressway", 4.3, "Continental", &["Grills", "International"]),
    seed("Yellow Chilli", "Maryland", "Lagos", "Kosofe", "Maryland Mall", 4.2, "Indian", &["Indian Cuisine"]),
    seed("Tantalizers", "Oshodi", "Lagos", "Oshodi-Isolo", "Oshodi", 3.9, "Fast Food", &["Local & Continental"]),
    seed("Genesis Restaurant", "Festac", "Lagos", "Amuwo-Odofin", "Festac Town", 4.1, "Continental", &["Grills"]),
    seed("November Cubes", "Abuja", "FCT", "Abuja Municipal", "Garki, Mambolo, Wuse", 4.67, "Nigerian", &["Jollof Rice"]),
    seed("Talenu Bukka", "Abuja", "FCT", "Abuja Municipal", "Gwarinpa", 4.44, "Nigerian", &["Jollof Rice", "Local Dishes"]),
    seed("Red Gourmet", "Abuja", "FCT", "Abuja Municipal", "Central Area", 4.2, "Nigerian", &["Jollof Rice"]),
    seed("Nkoyo", "Abuja", "FCT", "Abuja Municipal", "Wuse 2", 4.5, "Nigerian", &["Local Nigerian Dishes"]),
    seed("Wakkis", "Abuja", "FCT", "Abuja Municipal", "Gwarinpa", 4.3, "Nigerian", &["Suya", "Grills"]),
];
