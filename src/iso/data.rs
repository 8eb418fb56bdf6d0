// ============================================================================
// ISO-4217 Data
// Frozen table of active and historical ISO currencies
// ============================================================================
//
// Active currencies have no known start date unless their numeric code was
// used by a predecessor; in that case the start date is what keeps the
// validity windows disjoint. Historical currencies have an unknown minor
// unit. `None` as a minor unit marks a continuous unit of account.

/// (year, month, day)
pub(super) type Ymd = (i32, u32, u32);

/// alpha3, numeric, minor units per major unit, name, entities, active from
pub(super) type ActiveRow = (
    &'static str,
    u16,
    Option<u32>,
    &'static str,
    &'static [&'static str],
    Option<Ymd>,
);

/// alpha3, numeric, name, entities, active from, active until
pub(super) type HistoricalRow = (
    &'static str,
    u16,
    &'static str,
    &'static [&'static str],
    Option<Ymd>,
    Option<Ymd>,
);

#[rustfmt::skip]
pub(super) static ACTIVE: &[ActiveRow] = &[
    ("AED", 784, Some(100), "UAE Dirham", &["AE"], None),
    ("AFN", 971, Some(100), "Afghani", &["AF"], None),
    ("ALL", 8, Some(100), "Lek", &["AL"], None),
    ("AMD", 51, Some(100), "Armenian Dram", &["AM"], None),
    ("ANG", 532, Some(100), "Netherlands Antillean Guilder", &["CW", "SX"], None),
    ("AOA", 973, Some(100), "Kwanza", &["AO"], None),
    ("ARS", 32, Some(100), "Argentine Peso", &["AR"], Some((1992, 1, 1))),
    ("AUD", 36, Some(100), "Australian Dollar", &["AU", "CC", "CX", "HM", "KI", "NF", "NR", "TV"], None),
    ("AWG", 533, Some(100), "Aruban Florin", &["AW"], None),
    ("AZN", 944, Some(100), "Azerbaijan Manat", &["AZ"], None),
    ("BAM", 977, Some(100), "Convertible Mark", &["BA"], None),
    ("BBD", 52, Some(100), "Barbados Dollar", &["BB"], None),
    ("BDT", 50, Some(100), "Taka", &["BD"], None),
    ("BGN", 975, Some(100), "Bulgarian Lev", &["BG"], None),
    ("BHD", 48, Some(1000), "Bahraini Dinar", &["BH"], None),
    ("BIF", 108, Some(1), "Burundi Franc", &["BI"], None),
    ("BMD", 60, Some(100), "Bermudian Dollar", &["BM"], None),
    ("BND", 96, Some(100), "Brunei Dollar", &["BN"], None),
    ("BOB", 68, Some(100), "Boliviano", &["BO"], Some((1987, 1, 1))),
    ("BOV", 984, Some(100), "Mvdol", &["BO"], None),
    ("BRL", 986, Some(100), "Brazilian Real", &["BR"], None),
    ("BSD", 44, Some(100), "Bahamian Dollar", &["BS"], None),
    ("BTN", 64, Some(100), "Ngultrum", &["BT"], None),
    ("BWP", 72, Some(100), "Pula", &["BW"], None),
    ("BYN", 933, Some(100), "Belarusian Ruble", &["BY"], None),
    ("BZD", 84, Some(100), "Belize Dollar", &["BZ"], None),
    ("CAD", 124, Some(100), "Canadian Dollar", &["CA"], None),
    ("CDF", 976, Some(100), "Congolese Franc", &["CD"], None),
    ("CHE", 947, Some(100), "WIR Euro", &["CH"], None),
    ("CHF", 756, Some(100), "Swiss Franc", &["CH", "LI"], None),
    ("CHW", 948, Some(100), "WIR Franc", &["CH"], None),
    ("CLF", 990, Some(10000), "Unidad de Fomento", &["CL"], None),
    ("CLP", 152, Some(1), "Chilean Peso", &["CL"], None),
    ("CNY", 156, Some(100), "Yuan Renminbi", &["CN"], None),
    ("COP", 170, Some(100), "Colombian Peso", &["CO"], None),
    ("COU", 970, Some(100), "Unidad de Valor Real", &["CO"], None),
    ("CRC", 188, Some(100), "Costa Rican Colon", &["CR"], None),
    ("CUP", 192, Some(100), "Cuban Peso", &["CU"], None),
    ("CVE", 132, Some(100), "Cabo Verde Escudo", &["CV"], None),
    ("CZK", 203, Some(100), "Czech Koruna", &["CZ"], None),
    ("DJF", 262, Some(1), "Djibouti Franc", &["DJ"], None),
    ("DKK", 208, Some(100), "Danish Krone", &["DK", "FO", "GL"], None),
    ("DOP", 214, Some(100), "Dominican Peso", &["DO"], None),
    ("DZD", 12, Some(100), "Algerian Dinar", &["DZ"], None),
    ("EGP", 818, Some(100), "Egyptian Pound", &["EG"], None),
    ("ERN", 232, Some(100), "Nakfa", &["ER"], None),
    ("ETB", 230, Some(100), "Ethiopian Birr", &["ET"], None),
    ("EUR", 978, Some(100), "Euro", &["AD", "AT", "AX", "BE", "BL", "CY", "DE", "EE", "ES", "FI", "FR", "GF", "GP", "GR", "HR", "IE", "IT", "LT", "LU", "LV", "MC", "ME", "MF", "MQ", "MT", "NL", "PM", "PT", "RE", "SI", "SK", "SM", "TF", "VA", "XK", "YT"], Some((1999, 1, 1))),
    ("FJD", 242, Some(100), "Fiji Dollar", &["FJ"], None),
    ("FKP", 238, Some(100), "Falkland Islands Pound", &["FK"], None),
    ("GBP", 826, Some(100), "Pound Sterling", &["GB", "GG", "IM", "JE"], None),
    ("GEL", 981, Some(100), "Lari", &["GE"], None),
    ("GHS", 936, Some(100), "Ghana Cedi", &["GH"], None),
    ("GIP", 292, Some(100), "Gibraltar Pound", &["GI"], None),
    ("GMD", 270, Some(100), "Dalasi", &["GM"], None),
    ("GNF", 324, Some(1), "Guinean Franc", &["GN"], None),
    ("GTQ", 320, Some(100), "Quetzal", &["GT"], None),
    ("GYD", 328, Some(100), "Guyana Dollar", &["GY"], None),
    ("HKD", 344, Some(100), "Hong Kong Dollar", &["HK"], None),
    ("HNL", 340, Some(100), "Lempira", &["HN"], None),
    ("HTG", 332, Some(100), "Gourde", &["HT"], None),
    ("HUF", 348, Some(100), "Forint", &["HU"], None),
    ("IDR", 360, Some(100), "Rupiah", &["ID"], None),
    ("ILS", 376, Some(100), "New Israeli Sheqel", &["IL"], Some((1985, 9, 4))),
    ("INR", 356, Some(100), "Indian Rupee", &["BT", "IN"], None),
    ("IQD", 368, Some(1000), "Iraqi Dinar", &["IQ"], None),
    ("IRR", 364, Some(100), "Iranian Rial", &["IR"], None),
    ("ISK", 352, Some(1), "Iceland Krona", &["IS"], None),
    ("JMD", 388, Some(100), "Jamaican Dollar", &["JM"], None),
    ("JOD", 400, Some(1000), "Jordanian Dinar", &["JO"], None),
    ("JPY", 392, Some(1), "Yen", &["JP"], None),
    ("KES", 404, Some(100), "Kenyan Shilling", &["KE"], None),
    ("KGS", 417, Some(100), "Som", &["KG"], None),
    ("KHR", 116, Some(100), "Riel", &["KH"], None),
    ("KMF", 174, Some(1), "Comorian Franc", &["KM"], None),
    ("KPW", 408, Some(100), "North Korean Won", &["KP"], None),
    ("KRW", 410, Some(1), "Won", &["KR"], None),
    ("KWD", 414, Some(1000), "Kuwaiti Dinar", &["KW"], None),
    ("KYD", 136, Some(100), "Cayman Islands Dollar", &["KY"], None),
    ("KZT", 398, Some(100), "Tenge", &["KZ"], None),
    ("LAK", 418, Some(100), "Lao Kip", &["LA"], None),
    ("LBP", 422, Some(100), "Lebanese Pound", &["LB"], None),
    ("LKR", 144, Some(100), "Sri Lanka Rupee", &["LK"], None),
    ("LRD", 430, Some(100), "Liberian Dollar", &["LR"], None),
    ("LSL", 426, Some(100), "Loti", &["LS"], None),
    ("LYD", 434, Some(1000), "Libyan Dinar", &["LY"], None),
    ("MAD", 504, Some(100), "Moroccan Dirham", &["EH", "MA"], None),
    ("MDL", 498, Some(100), "Moldovan Leu", &["MD"], None),
    ("MGA", 969, Some(100), "Malagasy Ariary", &["MG"], None),
    ("MKD", 807, Some(100), "Denar", &["MK"], None),
    ("MMK", 104, Some(100), "Kyat", &["MM"], None),
    ("MNT", 496, Some(100), "Tugrik", &["MN"], None),
    ("MOP", 446, Some(100), "Pataca", &["MO"], None),
    ("MRU", 929, Some(100), "Ouguiya", &["MR"], None),
    ("MUR", 480, Some(100), "Mauritius Rupee", &["MU"], None),
    ("MVR", 462, Some(100), "Rufiyaa", &["MV"], None),
    ("MWK", 454, Some(100), "Malawi Kwacha", &["MW"], None),
    ("MXN", 484, Some(100), "Mexican Peso", &["MX"], Some((1993, 1, 1))),
    ("MXV", 979, Some(100), "Mexican Unidad de Inversion (UDI)", &["MX"], None),
    ("MYR", 458, Some(100), "Malaysian Ringgit", &["MY"], None),
    ("MZN", 943, Some(100), "Mozambique Metical", &["MZ"], None),
    ("NAD", 516, Some(100), "Namibia Dollar", &["NA"], None),
    ("NGN", 566, Some(100), "Naira", &["NG"], None),
    ("NIO", 558, Some(100), "Cordoba Oro", &["NI"], None),
    ("NOK", 578, Some(100), "Norwegian Krone", &["BV", "NO", "SJ"], None),
    ("NPR", 524, Some(100), "Nepalese Rupee", &["NP"], None),
    ("NZD", 554, Some(100), "New Zealand Dollar", &["CK", "NU", "NZ", "PN", "TK"], None),
    ("OMR", 512, Some(1000), "Rial Omani", &["OM"], None),
    ("PAB", 590, Some(100), "Balboa", &["PA"], None),
    ("PEN", 604, Some(100), "Sol", &["PE"], Some((1991, 7, 1))),
    ("PGK", 598, Some(100), "Kina", &["PG"], None),
    ("PHP", 608, Some(100), "Philippine Peso", &["PH"], None),
    ("PKR", 586, Some(100), "Pakistan Rupee", &["PK"], None),
    ("PLN", 985, Some(100), "Zloty", &["PL"], None),
    ("PYG", 600, Some(1), "Guarani", &["PY"], None),
    ("QAR", 634, Some(100), "Qatari Rial", &["QA"], None),
    ("RON", 946, Some(100), "Romanian Leu", &["RO"], None),
    ("RSD", 941, Some(100), "Serbian Dinar", &["RS"], None),
    ("RUB", 643, Some(100), "Russian Ruble", &["RU"], None),
    ("RWF", 646, Some(1), "Rwanda Franc", &["RW"], None),
    ("SAR", 682, Some(100), "Saudi Riyal", &["SA"], None),
    ("SBD", 90, Some(100), "Solomon Islands Dollar", &["SB"], None),
    ("SCR", 690, Some(100), "Seychelles Rupee", &["SC"], None),
    ("SDG", 938, Some(100), "Sudanese Pound", &["SD"], None),
    ("SEK", 752, Some(100), "Swedish Krona", &["SE"], None),
    ("SGD", 702, Some(100), "Singapore Dollar", &["SG"], None),
    ("SHP", 654, Some(100), "Saint Helena Pound", &["SH"], None),
    ("SLE", 925, Some(100), "Leone", &["SL"], None),
    ("SOS", 706, Some(100), "Somali Shilling", &["SO"], None),
    ("SRD", 968, Some(100), "Surinam Dollar", &["SR"], None),
    ("SSP", 728, Some(100), "South Sudanese Pound", &["SS"], None),
    ("STN", 930, Some(100), "Dobra", &["ST"], None),
    ("SVC", 222, Some(100), "El Salvador Colon", &["SV"], None),
    ("SYP", 760, Some(100), "Syrian Pound", &["SY"], None),
    ("SZL", 748, Some(100), "Lilangeni", &["SZ"], None),
    ("THB", 764, Some(100), "Baht", &["TH"], None),
    ("TJS", 972, Some(100), "Somoni", &["TJ"], None),
    ("TMT", 934, Some(100), "Turkmenistan New Manat", &["TM"], None),
    ("TND", 788, Some(1000), "Tunisian Dinar", &["TN"], None),
    ("TOP", 776, Some(100), "Pa'anga", &["TO"], None),
    ("TRY", 949, Some(100), "Turkish Lira", &["TR"], None),
    ("TTD", 780, Some(100), "Trinidad and Tobago Dollar", &["TT"], None),
    ("TWD", 901, Some(100), "New Taiwan Dollar", &["TW"], None),
    ("TZS", 834, Some(100), "Tanzanian Shilling", &["TZ"], None),
    ("UAH", 980, Some(100), "Hryvnia", &["UA"], None),
    ("UGX", 800, Some(1), "Uganda Shilling", &["UG"], None),
    ("USD", 840, Some(100), "US Dollar", &["AS", "BQ", "EC", "FM", "GU", "IO", "MH", "MP", "PR", "PW", "SV", "TC", "TL", "UM", "US", "VG", "VI"], None),
    ("USN", 997, Some(100), "US Dollar (Next day)", &["US"], None),
    ("UYI", 940, Some(1), "Uruguay Peso en Unidades Indexadas (UI)", &["UY"], None),
    ("UYU", 858, Some(100), "Peso Uruguayo", &["UY"], Some((1993, 3, 1))),
    ("UYW", 927, Some(10000), "Unidad Previsional", &["UY"], None),
    ("UZS", 860, Some(100), "Uzbekistan Sum", &["UZ"], None),
    ("VED", 926, Some(100), "Bolivar Soberano", &["VE"], None),
    ("VES", 928, Some(100), "Bolivar Soberano", &["VE"], None),
    ("VND", 704, Some(1), "Dong", &["VN"], None),
    ("VUV", 548, Some(1), "Vatu", &["VU"], None),
    ("WST", 882, Some(100), "Tala", &["WS"], None),
    ("XAF", 950, Some(1), "CFA Franc BEAC", &["CF", "CG", "CM", "GA", "GQ", "TD"], None),
    ("XAG", 961, None, "Silver", &[], None),
    ("XAU", 959, None, "Gold", &[], None),
    ("XBA", 955, None, "Bond Markets Unit European Composite Unit (EURCO)", &[], None),
    ("XBB", 956, None, "Bond Markets Unit European Monetary Unit (E.M.U.-6)", &[], None),
    ("XBC", 957, None, "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)", &[], None),
    ("XBD", 958, None, "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)", &[], None),
    ("XCD", 951, Some(100), "East Caribbean Dollar", &["AG", "AI", "DM", "GD", "KN", "LC", "MS", "VC"], None),
    ("XDR", 960, None, "SDR (Special Drawing Right)", &[], None),
    ("XOF", 952, Some(1), "CFA Franc BCEAO", &["BF", "BJ", "CI", "GW", "ML", "NE", "SN", "TG"], None),
    ("XPD", 964, None, "Palladium", &[], None),
    ("XPF", 953, Some(1), "CFP Franc", &["NC", "PF", "WF"], None),
    ("XPT", 962, None, "Platinum", &[], None),
    ("XSU", 994, None, "Sucre", &[], None),
    ("XTS", 963, None, "Codes specifically reserved for testing purposes", &[], None),
    ("XUA", 965, None, "ADB Unit of Account", &[], None),
    ("XXX", 999, None, "The codes assigned for transactions where no currency is involved", &[], None),
    ("YER", 886, Some(100), "Yemeni Rial", &["YE"], None),
    ("ZAR", 710, Some(100), "Rand", &["LS", "NA", "ZA"], None),
    ("ZMW", 967, Some(100), "Zambian Kwacha", &["ZM"], None),
    ("ZWG", 924, Some(100), "Zimbabwe Gold", &["ZW"], None),
];

#[rustfmt::skip]
pub(super) static HISTORICAL: &[HistoricalRow] = &[
    // Numeric codes reused by a successor
    ("ARP", 32, "Peso Argentino", &["AR"], Some((1983, 6, 6)), Some((1985, 6, 13))),
    ("ARA", 32, "Austral", &["AR"], Some((1985, 6, 14)), Some((1991, 12, 31))),
    ("AOK", 24, "Kwanza", &["AO"], Some((1977, 1, 8)), Some((1990, 9, 24))),
    ("AON", 24, "New Kwanza", &["AO"], Some((1990, 9, 25)), Some((1995, 6, 30))),
    ("BOP", 68, "Peso boliviano", &["BO"], Some((1963, 1, 1)), Some((1986, 12, 31))),
    ("ILP", 376, "Pound", &["IL"], None, Some((1980, 2, 21))),
    ("ILR", 376, "Old Shekel", &["IL"], Some((1980, 2, 22)), Some((1985, 9, 3))),
    ("MXP", 484, "Mexican Peso", &["MX"], None, Some((1992, 12, 31))),
    ("PEH", 604, "Sol", &["PE"], None, Some((1985, 1, 31))),
    ("PEI", 604, "Inti", &["PE"], Some((1985, 2, 1)), Some((1991, 6, 30))),
    ("SDP", 736, "Sudanese Pound", &["SD"], None, Some((1992, 6, 7))),
    ("SDD", 736, "Sudanese Dinar", &["SD"], Some((1992, 6, 8)), Some((2007, 6, 30))),
    ("SUR", 810, "Rouble", &["SUHH"], Some((1961, 1, 1)), Some((1991, 12, 31))),
    ("RUR", 810, "Russian Ruble", &["RU"], Some((1992, 1, 1)), Some((1997, 12, 31))),
    ("UYP", 858, "Uruguayan Peso", &["UY"], Some((1975, 7, 1)), Some((1993, 2, 28))),
    ("YUM", 891, "New Dinar", &["YUCS"], Some((1994, 1, 24)), Some((2003, 7, 2))),
    ("CSD", 891, "Serbian Dinar", &["CSXX"], Some((2003, 7, 3)), Some((2006, 12, 31))),
    ("ZRZ", 180, "Zaire", &["ZRCD"], Some((1967, 1, 1)), Some((1993, 10, 21))),
    ("ZRN", 180, "New Zaire", &["ZRCD"], Some((1993, 10, 22)), Some((1999, 6, 30))),
    // Euro legacy currencies
    ("ATS", 40, "Schilling", &["AT"], None, Some((2001, 12, 31))),
    ("BEF", 56, "Belgian Franc", &["BE"], None, Some((2001, 12, 31))),
    ("CYP", 196, "Cyprus Pound", &["CY"], None, Some((2007, 12, 31))),
    ("DEM", 276, "Deutsche Mark", &["DE"], Some((1948, 6, 20)), Some((2001, 12, 31))),
    ("EEK", 233, "Kroon", &["EE"], Some((1992, 6, 20)), Some((2010, 12, 31))),
    ("ESP", 724, "Spanish Peseta", &["ES"], None, Some((2001, 12, 31))),
    ("FIM", 246, "Markka", &["FI"], None, Some((2001, 12, 31))),
    ("FRF", 250, "French Franc", &["FR"], Some((1960, 1, 1)), Some((2001, 12, 31))),
    ("GRD", 300, "Drachma", &["GR"], None, Some((2001, 12, 31))),
    ("HRK", 191, "Kuna", &["HR"], Some((1994, 5, 30)), Some((2022, 12, 31))),
    ("IEP", 372, "Irish Pound", &["IE"], None, Some((2001, 12, 31))),
    ("ITL", 380, "Italian Lira", &["IT"], None, Some((2001, 12, 31))),
    ("LTL", 440, "Lithuanian Litas", &["LT"], Some((1993, 6, 25)), Some((2014, 12, 31))),
    ("LUF", 442, "Luxembourg Franc", &["LU"], None, Some((2001, 12, 31))),
    ("LVL", 428, "Latvian Lats", &["LV"], Some((1993, 3, 5)), Some((2013, 12, 31))),
    ("MTL", 470, "Maltese Lira", &["MT"], None, Some((2007, 12, 31))),
    ("NLG", 528, "Netherlands Guilder", &["NL"], None, Some((2001, 12, 31))),
    ("PTE", 620, "Portuguese Escudo", &["PT"], None, Some((2001, 12, 31))),
    ("SIT", 705, "Tolar", &["SI"], Some((1991, 10, 8)), Some((2006, 12, 31))),
    ("SKK", 703, "Slovak Koruna", &["SK"], Some((1993, 2, 8)), Some((2008, 12, 31))),
    ("XEU", 954, "European Currency Unit (E.C.U)", &[], Some((1979, 3, 13)), Some((1998, 12, 31))),
    // Replaced under a new numeric code
    ("AZM", 31, "Azerbaijanian Manat", &["AZ"], Some((1992, 8, 15)), Some((2005, 12, 31))),
    ("BYR", 974, "Belarusian Ruble", &["BY"], Some((2000, 1, 1)), Some((2016, 6, 30))),
    ("CUC", 931, "Peso Convertible", &["CU"], Some((1994, 1, 1)), Some((2020, 12, 31))),
    ("GHC", 288, "Cedi", &["GH"], Some((1967, 2, 23)), Some((2007, 6, 30))),
    ("MRO", 478, "Ouguiya", &["MR"], Some((1973, 6, 29)), Some((2017, 12, 31))),
    ("MZM", 508, "Mozambique Metical", &["MZ"], Some((1980, 6, 16)), Some((2006, 6, 30))),
    ("ROL", 642, "Old Leu", &["RO"], None, Some((2005, 6, 30))),
    ("SLL", 694, "Leone", &["SL"], Some((1964, 8, 4)), None),
    ("STD", 678, "Dobra", &["ST"], Some((1977, 9, 8)), Some((2017, 12, 31))),
    ("TMM", 795, "Turkmenistan Manat", &["TM"], Some((1993, 11, 1)), Some((2008, 12, 31))),
    ("TRL", 792, "Old Turkish Lira", &["TR"], None, Some((2005, 12, 31))),
    ("VEB", 862, "Bolivar", &["VE"], None, Some((2007, 12, 31))),
    ("VEF", 937, "Bolivar Fuerte", &["VE"], Some((2008, 1, 1)), Some((2018, 8, 20))),
    ("ZMK", 894, "Zambian Kwacha", &["ZM"], Some((1968, 1, 16)), Some((2012, 12, 31))),
    ("ZWD", 716, "Zimbabwe Dollar", &["ZW"], Some((1980, 4, 18)), Some((2006, 7, 31))),
    ("ZWL", 932, "Zimbabwe Dollar", &["ZW"], Some((2009, 2, 2)), Some((2024, 8, 31))),
];
