use crate::models::{Address, Category, Furnishing, ListedBy, ListingStatus, Property, PropertyType};
use chrono::NaiveDate;

/// Cities offered by the search and listing forms, sorted alphabetically.
pub const CITIES: &[&str] = &[
    "Agra", "Ahmedabad", "Ajmer", "Akola", "Aligarh", "Allahabad", "Ambala", "Amravati",
    "Amritsar", "Anand", "Asansol", "Aurangabad", "Bangalore", "Bareilly", "Baroda", "Belgaum",
    "Bhavnagar", "Bhilai", "Bhiwandi", "Bhopal", "Bhubaneswar", "Bikaner", "Bilaspur", "Bokaro",
    "Chandigarh", "Chennai", "Coimbatore", "Cuttack", "Dehradun", "Delhi", "Dhanbad",
    "Durgapur", "Erode", "Faridabad", "Firozabad", "Gandhinagar", "Ghaziabad", "Goa",
    "Gorakhpur", "Gulbarga", "Guntur", "Gurgaon", "Guwahati", "Gwalior", "Haridwar", "Howrah",
    "Hubli-Dharwad", "Hyderabad", "Indore", "Jabalpur", "Jaipur", "Jalandhar", "Jammu",
    "Jamnagar", "Jamshedpur", "Jhansi", "Jodhpur", "Kakinada", "Kalyan-Dombivli", "Kannur",
    "Kanpur", "Kochi", "Kolhapur", "Kolkata", "Kollam", "Kota", "Kozhikode", "Kurnool",
    "Lucknow", "Ludhiana", "Madurai", "Malappuram", "Malegaon", "Mangalore", "Meerut",
    "Mira-Bhayandar", "Moradabad", "Mumbai", "Muzaffarnagar", "Mysore", "Nagpur", "Nanded",
    "Nashik", "Navi Mumbai", "Nellore", "Noida", "Panipat", "Patiala", "Patna",
    "Pimpri-Chinchwad", "Pondicherry", "Pune", "Raipur", "Rajahmundry", "Rajkot", "Ranchi",
    "Rohtak", "Rourkela", "Saharanpur", "Salem", "Sangli", "Shimla", "Siliguri", "Solapur",
    "Srinagar", "Surat", "Thane", "Thiruvananthapuram", "Thrissur", "Tiruchirappalli",
    "Tirunelveli", "Tiruppur", "Udaipur", "Ujjain", "Vadodara", "Varanasi", "Vasai-Virar",
    "Vellore", "Vijayawada", "Visakhapatnam", "Warangal",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn picsum(seeds: &[u32]) -> Vec<String> {
    seeds
        .iter()
        .map(|seed| format!("https://picsum.photos/800/600?random={}", seed))
        .collect()
}

/// Sample listings shipped with the marketplace
pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern 2 BHK Apartment in Alkapuri".to_string(),
            property_type: PropertyType::Apartment,
            category: Category::Residential,
            bhk: Some(2),
            area_sq_ft: 1200,
            rent: 22_000,
            maintenance: Some(2_000),
            deposit: 50_000,
            furnishing: Furnishing::SemiFurnished,
            available_date: date(2023, 11, 1),
            pets_allowed: false,
            bachelor_allowed: true,
            address: Address {
                city: "Vadodara".to_string(),
                locality: "Alkapuri".to_string(),
                state: "Gujarat".to_string(),
                pin: "390007".to_string(),
            },
            images: picsum(&[1, 2, 3]),
            description: "Spacious 2 BHK with modular kitchen and balcony facing the park. 24/7 water supply and security.".to_string(),
            amenities: strings(&["Parking", "Lift", "Security", "Power Backup"]),
            owner_name: "Kiran Patel".to_string(),
            owner_phone: "9909563256".to_string(),
            status: ListingStatus::Active,
            posted_date: date(2023, 10, 15),
            verified: true,
            listed_by: ListedBy::Owner,
        },
        Property {
            id: "2".to_string(),
            title: "Luxury 3 BHK Villa with Garden".to_string(),
            property_type: PropertyType::Villa,
            category: Category::Residential,
            bhk: Some(3),
            area_sq_ft: 2500,
            rent: 65_000,
            maintenance: Some(5_000),
            deposit: 200_000,
            furnishing: Furnishing::Furnished,
            available_date: date(2023, 10, 25),
            pets_allowed: true,
            bachelor_allowed: false,
            address: Address {
                city: "Ahmedabad".to_string(),
                locality: "Bopal".to_string(),
                state: "Gujarat".to_string(),
                pin: "380058".to_string(),
            },
            images: picsum(&[4, 5, 6]),
            description: "Independent villa in a gated society. Fully furnished with ACs, beds, and sofa. Ideal for families.".to_string(),
            amenities: strings(&["Garden", "Club House", "Swimming Pool", "Gym"]),
            owner_name: "Rajesh Shah".to_string(),
            owner_phone: "9876543210".to_string(),
            status: ListingStatus::Active,
            posted_date: date(2023, 10, 18),
            verified: true,
            listed_by: ListedBy::Broker,
        },
        Property {
            id: "3".to_string(),
            title: "Commercial Office Space in BKC".to_string(),
            property_type: PropertyType::Office,
            category: Category::Commercial,
            bhk: None,
            area_sq_ft: 1500,
            rent: 150_000,
            maintenance: Some(12_000),
            deposit: 600_000,
            furnishing: Furnishing::Furnished,
            available_date: date(2023, 11, 10),
            pets_allowed: false,
            bachelor_allowed: true,
            address: Address {
                city: "Mumbai".to_string(),
                locality: "Bandra Kurla Complex".to_string(),
                state: "Maharashtra".to_string(),
                pin: "400051".to_string(),
            },
            images: picsum(&[7, 8]),
            description: "Premium office space with 20 workstations, 1 cabin, and a conference room.".to_string(),
            amenities: strings(&["Central AC", "Cafeteria", "Parking", "Fire Safety"]),
            owner_name: "Vikram Malhotra".to_string(),
            owner_phone: "9988776655".to_string(),
            status: ListingStatus::Active,
            posted_date: date(2023, 10, 20),
            verified: true,
            listed_by: ListedBy::Broker,
        },
        Property {
            id: "4".to_string(),
            title: "1 BHK for Students/Bachelors".to_string(),
            property_type: PropertyType::Apartment,
            category: Category::Residential,
            bhk: Some(1),
            area_sq_ft: 600,
            rent: 15_000,
            maintenance: Some(1_000),
            deposit: 30_000,
            furnishing: Furnishing::Unfurnished,
            available_date: date(2023, 10, 22),
            pets_allowed: false,
            bachelor_allowed: true,
            address: Address {
                city: "Pune".to_string(),
                locality: "Viman Nagar".to_string(),
                state: "Maharashtra".to_string(),
                pin: "411014".to_string(),
            },
            images: picsum(&[9, 10]),
            description: "Close to colleges and IT park. Simple apartment with good ventilation.".to_string(),
            amenities: strings(&["Water Supply", "Security"]),
            owner_name: "Suresh Patil".to_string(),
            owner_phone: "9123456789".to_string(),
            status: ListingStatus::Active,
            posted_date: date(2023, 10, 21),
            verified: false,
            listed_by: ListedBy::Owner,
        },
    ]
}
