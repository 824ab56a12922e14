//! Static sample data: the city table and the subnet-type labels.
//!
//! Immutable, compiled in, never persisted.

use serde::Serialize;

// ============================================================================
// TABLE
// ============================================================================

/// One row of the sample table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityRow {
    pub rank: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub population: &'static str,
}

impl CityRow {
    const fn new(
        rank: &'static str,
        city: &'static str,
        country: &'static str,
        population: &'static str,
    ) -> Self {
        CityRow { rank, city, country, population }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&'static str; 4] {
        [self.rank, self.city, self.country, self.population]
    }
}

/// A table column: header title and fixed width in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

/// Column layout of the city table.
pub const COLUMNS: [Column; 4] = [
    Column { title: "Rank", width: 4 },
    Column { title: "City", width: 10 },
    Column { title: "Country", width: 10 },
    Column { title: "Population", width: 10 },
];

/// Most populous urban areas.
pub static CITY_ROWS: [CityRow; 100] = [
    CityRow::new("1", "Tokyo", "Japan", "37,274,000"),
    CityRow::new("2", "Delhi", "India", "32,065,760"),
    CityRow::new("3", "Shanghai", "China", "28,516,904"),
    CityRow::new("4", "Dhaka", "Bangladesh", "22,478,116"),
    CityRow::new("5", "São Paulo", "Brazil", "22,429,800"),
    CityRow::new("6", "Mexico City", "Mexico", "22,085,140"),
    CityRow::new("7", "Cairo", "Egypt", "21,750,020"),
    CityRow::new("8", "Beijing", "China", "21,333,332"),
    CityRow::new("9", "Mumbai", "India", "20,961,472"),
    CityRow::new("10", "Osaka", "Japan", "19,059,856"),
    CityRow::new("11", "Chongqing", "China", "16,874,740"),
    CityRow::new("12", "Karachi", "Pakistan", "16,839,950"),
    CityRow::new("13", "Istanbul", "Turkey", "15,636,243"),
    CityRow::new("14", "Kinshasa", "DR Congo", "15,628,085"),
    CityRow::new("15", "Lagos", "Nigeria", "15,387,639"),
    CityRow::new("16", "Buenos Aires", "Argentina", "15,369,919"),
    CityRow::new("17", "Kolkata", "India", "15,133,888"),
    CityRow::new("18", "Manila", "Philippines", "14,406,059"),
    CityRow::new("19", "Tianjin", "China", "14,011,828"),
    CityRow::new("20", "Guangzhou", "China", "13,964,637"),
    CityRow::new("21", "Rio De Janeiro", "Brazil", "13,634,274"),
    CityRow::new("22", "Lahore", "Pakistan", "13,541,764"),
    CityRow::new("23", "Bangalore", "India", "13,193,035"),
    CityRow::new("24", "Shenzhen", "China", "12,831,330"),
    CityRow::new("25", "Moscow", "Russia", "12,640,818"),
    CityRow::new("26", "Chennai", "India", "11,503,293"),
    CityRow::new("27", "Bogota", "Colombia", "11,344,312"),
    CityRow::new("28", "Paris", "France", "11,142,303"),
    CityRow::new("29", "Jakarta", "Indonesia", "11,074,811"),
    CityRow::new("30", "Lima", "Peru", "11,044,607"),
    CityRow::new("31", "Bangkok", "Thailand", "10,899,698"),
    CityRow::new("32", "Hyderabad", "India", "10,534,418"),
    CityRow::new("33", "Seoul", "South Korea", "9,975,709"),
    CityRow::new("34", "Nagoya", "Japan", "9,571,596"),
    CityRow::new("35", "London", "United Kingdom", "9,540,576"),
    CityRow::new("36", "Chengdu", "China", "9,478,521"),
    CityRow::new("37", "Nanjing", "China", "9,429,381"),
    CityRow::new("38", "Tehran", "Iran", "9,381,546"),
    CityRow::new("39", "Ho Chi Minh City", "Vietnam", "9,077,158"),
    CityRow::new("40", "Luanda", "Angola", "8,952,496"),
    CityRow::new("41", "Wuhan", "China", "8,591,611"),
    CityRow::new("42", "Xi An Shaanxi", "China", "8,537,646"),
    CityRow::new("43", "Ahmedabad", "India", "8,450,228"),
    CityRow::new("44", "Kuala Lumpur", "Malaysia", "8,419,566"),
    CityRow::new("45", "New York City", "United States", "8,177,020"),
    CityRow::new("46", "Hangzhou", "China", "8,044,878"),
    CityRow::new("47", "Surat", "India", "7,784,276"),
    CityRow::new("48", "Suzhou", "China", "7,764,499"),
    CityRow::new("49", "Hong Kong", "Hong Kong", "7,643,256"),
    CityRow::new("50", "Riyadh", "Saudi Arabia", "7,538,200"),
    CityRow::new("51", "Shenyang", "China", "7,527,975"),
    CityRow::new("52", "Baghdad", "Iraq", "7,511,920"),
    CityRow::new("53", "Dongguan", "China", "7,511,851"),
    CityRow::new("54", "Foshan", "China", "7,497,263"),
    CityRow::new("55", "Dar Es Salaam", "Tanzania", "7,404,689"),
    CityRow::new("56", "Pune", "India", "6,987,077"),
    CityRow::new("57", "Santiago", "Chile", "6,856,939"),
    CityRow::new("58", "Madrid", "Spain", "6,713,557"),
    CityRow::new("59", "Haerbin", "China", "6,665,951"),
    CityRow::new("60", "Toronto", "Canada", "6,312,974"),
    CityRow::new("61", "Belo Horizonte", "Brazil", "6,194,292"),
    CityRow::new("62", "Khartoum", "Sudan", "6,160,327"),
    CityRow::new("63", "Johannesburg", "South Africa", "6,065,354"),
    CityRow::new("64", "Singapore", "Singapore", "6,039,577"),
    CityRow::new("65", "Dalian", "China", "5,930,140"),
    CityRow::new("66", "Qingdao", "China", "5,865,232"),
    CityRow::new("67", "Zhengzhou", "China", "5,690,312"),
    CityRow::new("68", "Ji Nan Shandong", "China", "5,663,015"),
    CityRow::new("69", "Barcelona", "Spain", "5,658,472"),
    CityRow::new("70", "Saint Petersburg", "Russia", "5,535,556"),
    CityRow::new("71", "Abidjan", "Ivory Coast", "5,515,790"),
    CityRow::new("72", "Yangon", "Myanmar", "5,514,454"),
    CityRow::new("73", "Fukuoka", "Japan", "5,502,591"),
    CityRow::new("74", "Alexandria", "Egypt", "5,483,605"),
    CityRow::new("75", "Guadalajara", "Mexico", "5,339,583"),
    CityRow::new("76", "Ankara", "Turkey", "5,309,690"),
    CityRow::new("77", "Chittagong", "Bangladesh", "5,252,842"),
    CityRow::new("78", "Addis Ababa", "Ethiopia", "5,227,794"),
    CityRow::new("79", "Melbourne", "Australia", "5,150,766"),
    CityRow::new("80", "Nairobi", "Kenya", "5,118,844"),
    CityRow::new("81", "Hanoi", "Vietnam", "5,067,352"),
    CityRow::new("82", "Sydney", "Australia", "5,056,571"),
    CityRow::new("83", "Monterrey", "Mexico", "5,036,535"),
    CityRow::new("84", "Changsha", "China", "4,809,887"),
    CityRow::new("85", "Brasilia", "Brazil", "4,803,877"),
    CityRow::new("86", "Cape Town", "South Africa", "4,800,954"),
    CityRow::new("87", "Jiddah", "Saudi Arabia", "4,780,740"),
    CityRow::new("88", "Urumqi", "China", "4,710,203"),
    CityRow::new("89", "Kunming", "China", "4,657,381"),
    CityRow::new("90", "Changchun", "China", "4,616,002"),
    CityRow::new("91", "Hefei", "China", "4,496,456"),
    CityRow::new("92", "Shantou", "China", "4,490,411"),
    CityRow::new("93", "Xinbei", "Taiwan", "4,470,672"),
    CityRow::new("94", "Kabul", "Afghanistan", "4,457,882"),
    CityRow::new("95", "Ningbo", "China", "4,405,292"),
    CityRow::new("96", "Tel Aviv", "Israel", "4,343,584"),
    CityRow::new("97", "Yaounde", "Cameroon", "4,336,670"),
    CityRow::new("98", "Rome", "Italy", "4,297,877"),
    CityRow::new("99", "Shijiazhuang", "China", "4,285,135"),
    CityRow::new("100", "Montreal", "Canada", "4,276,526"),
];

// ============================================================================
// SUBNET TYPES
// ============================================================================

/// Labels offered by the type picker, in display order.
pub const SUBNET_TYPES: [&str; 4] = ["Normal", "Reserved", "DHCP Range", "Gateway"];

/// Type assigned to a new address before the user picks one.
pub const DEFAULT_SUBNET_TYPE: &str = SUBNET_TYPES[0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_sequential() {
        for (i, row) in CITY_ROWS.iter().enumerate() {
            assert_eq!(row.rank, (i + 1).to_string());
        }
    }

    #[test]
    fn first_and_last_rows() {
        assert_eq!(CITY_ROWS[0].cells(), ["1", "Tokyo", "Japan", "37,274,000"]);
        assert_eq!(CITY_ROWS[99].city, "Montreal");
    }

    #[test]
    fn gateway_is_a_subnet_type() {
        assert!(SUBNET_TYPES.contains(&"Gateway"));
        assert_eq!(DEFAULT_SUBNET_TYPE, "Normal");
    }
}
