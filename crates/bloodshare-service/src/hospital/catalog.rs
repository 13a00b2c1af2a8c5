use bloodshare_entity::hospital::{GeoPoint, Hospital};

const ENTRIES: &[(&str, &str, &str, f64, f64)] = &[
    ("KEM Hospital", "Mumbai", "Acharya Donde Marg, Parel", 19.0025, 72.8416),
    ("Lilavati Hospital", "Mumbai", "A-791, Bandra Reclamation, Bandra West", 19.0510, 72.8290),
    ("AIIMS Delhi", "Delhi", "Sri Aurobindo Marg, Ansari Nagar", 28.5672, 77.2100),
    ("Sir Ganga Ram Hospital", "Delhi", "Rajinder Nagar", 28.6383, 77.1895),
    ("Victoria Hospital", "Bangalore", "Fort Road, Kalasipalya", 12.9634, 77.5738),
    ("Manipal Hospital", "Bangalore", "98, HAL Old Airport Road", 12.9592, 77.6484),
    ("Rajiv Gandhi Government General Hospital", "Chennai", "Poonamallee High Road, Park Town", 13.0810, 80.2770),
    ("Apollo Hospital", "Chennai", "21, Greams Lane, Thousand Lights", 13.0604, 80.2496),
    ("SSKM Hospital", "Kolkata", "244, AJC Bose Road, Bhowanipore", 22.5393, 88.3434),
    ("Medical College Hospital", "Kolkata", "88, College Street", 22.5745, 88.3629),
    ("Osmania General Hospital", "Hyderabad", "Afzal Gunj", 17.3717, 78.4747),
    ("Nizam's Institute of Medical Sciences", "Hyderabad", "Punjagutta", 17.4213, 78.4500),
    ("Sassoon General Hospital", "Pune", "Jai Prakash Narayan Road, Near Pune Station", 18.5286, 73.8712),
    ("Ruby Hall Clinic", "Pune", "40, Sassoon Road", 18.5326, 73.8770),
    ("Civil Hospital", "Ahmedabad", "Asarwa", 23.0520, 72.6032),
    ("Sterling Hospital", "Ahmedabad", "Off Gurukul Road, Memnagar", 23.0435, 72.5460),
];

pub(super) fn builtin() -> Vec<Hospital> {
    ENTRIES
        .iter()
        .map(|&(name, city, address, lat, lon)| Hospital {
            name: name.to_string(),
            city: city.to_string(),
            address: address.to_string(),
            phone: None,
            location: GeoPoint { lat, lon },
        })
        .collect()
}
