//! Markets: ISO 3166-1 alpha-2 country codes, plus "XK" for Kosovo,
//! which the service uses although it has no official assignment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

macro_rules! markets {
    ($($variant:ident => $code:literal,)+) => {
        /// A market the service can restrict content availability to.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Market {
            $(
                #[doc = $code]
                $variant,
            )+
        }

        impl Market {
            /// Every recognized market, in code order.
            pub const ALL: &'static [Market] = &[$(Market::$variant,)+];

            /// The upper-case two-letter code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Market::$variant => $code,)+
                }
            }

            /// Look up a market by its two-letter code.
            ///
            /// Matching is exact; the service always sends upper case.
            pub fn from_code(code: &str) -> Result<Self, ModelError> {
                match code {
                    $($code => Ok(Market::$variant),)+
                    _ => Err(ModelError::UnknownMarket(code.to_string())),
                }
            }
        }
    };
}

markets! {
    Ad => "AD", Ae => "AE", Af => "AF", Ag => "AG", Ai => "AI", Al => "AL", Am => "AM",
    Ao => "AO", Aq => "AQ", Ar => "AR", As => "AS", At => "AT", Au => "AU", Aw => "AW",
    Ax => "AX", Az => "AZ", Ba => "BA", Bb => "BB", Bd => "BD", Be => "BE", Bf => "BF",
    Bg => "BG", Bh => "BH", Bi => "BI", Bj => "BJ", Bl => "BL", Bm => "BM", Bn => "BN",
    Bo => "BO", Bq => "BQ", Br => "BR", Bs => "BS", Bt => "BT", Bv => "BV", Bw => "BW",
    By => "BY", Bz => "BZ", Ca => "CA", Cc => "CC", Cd => "CD", Cf => "CF", Cg => "CG",
    Ch => "CH", Ci => "CI", Ck => "CK", Cl => "CL", Cm => "CM", Cn => "CN", Co => "CO",
    Cr => "CR", Cu => "CU", Cv => "CV", Cw => "CW", Cx => "CX", Cy => "CY", Cz => "CZ",
    De => "DE", Dj => "DJ", Dk => "DK", Dm => "DM", Do => "DO", Dz => "DZ", Ec => "EC",
    Ee => "EE", Eg => "EG", Eh => "EH", Er => "ER", Es => "ES", Et => "ET", Fi => "FI",
    Fj => "FJ", Fk => "FK", Fm => "FM", Fo => "FO", Fr => "FR", Ga => "GA", Gb => "GB",
    Gd => "GD", Ge => "GE", Gf => "GF", Gg => "GG", Gh => "GH", Gi => "GI", Gl => "GL",
    Gm => "GM", Gn => "GN", Gp => "GP", Gq => "GQ", Gr => "GR", Gs => "GS", Gt => "GT",
    Gu => "GU", Gw => "GW", Gy => "GY", Hk => "HK", Hm => "HM", Hn => "HN", Hr => "HR",
    Ht => "HT", Hu => "HU", Id => "ID", Ie => "IE", Il => "IL", Im => "IM", In => "IN",
    Io => "IO", Iq => "IQ", Ir => "IR", Is => "IS", It => "IT", Je => "JE", Jm => "JM",
    Jo => "JO", Jp => "JP", Ke => "KE", Kg => "KG", Kh => "KH", Ki => "KI", Km => "KM",
    Kn => "KN", Kp => "KP", Kr => "KR", Kw => "KW", Ky => "KY", Kz => "KZ", La => "LA",
    Lb => "LB", Lc => "LC", Li => "LI", Lk => "LK", Lr => "LR", Ls => "LS", Lt => "LT",
    Lu => "LU", Lv => "LV", Ly => "LY", Ma => "MA", Mc => "MC", Md => "MD", Me => "ME",
    Mf => "MF", Mg => "MG", Mh => "MH", Mk => "MK", Ml => "ML", Mm => "MM", Mn => "MN",
    Mo => "MO", Mp => "MP", Mq => "MQ", Mr => "MR", Ms => "MS", Mt => "MT", Mu => "MU",
    Mv => "MV", Mw => "MW", Mx => "MX", My => "MY", Mz => "MZ", Na => "NA", Nc => "NC",
    Ne => "NE", Nf => "NF", Ng => "NG", Ni => "NI", Nl => "NL", No => "NO", Np => "NP",
    Nr => "NR", Nu => "NU", Nz => "NZ", Om => "OM", Pa => "PA", Pe => "PE", Pf => "PF",
    Pg => "PG", Ph => "PH", Pk => "PK", Pl => "PL", Pm => "PM", Pn => "PN", Pr => "PR",
    Ps => "PS", Pt => "PT", Pw => "PW", Py => "PY", Qa => "QA", Re => "RE", Ro => "RO",
    Rs => "RS", Ru => "RU", Rw => "RW", Sa => "SA", Sb => "SB", Sc => "SC", Sd => "SD",
    Se => "SE", Sg => "SG", Sh => "SH", Si => "SI", Sj => "SJ", Sk => "SK", Sl => "SL",
    Sm => "SM", Sn => "SN", So => "SO", Sr => "SR", Ss => "SS", St => "ST", Sv => "SV",
    Sx => "SX", Sy => "SY", Sz => "SZ", Tc => "TC", Td => "TD", Tf => "TF", Tg => "TG",
    Th => "TH", Tj => "TJ", Tk => "TK", Tl => "TL", Tm => "TM", Tn => "TN", To => "TO",
    Tr => "TR", Tt => "TT", Tv => "TV", Tw => "TW", Tz => "TZ", Ua => "UA", Ug => "UG",
    Um => "UM", Us => "US", Uy => "UY", Uz => "UZ", Va => "VA", Vc => "VC", Ve => "VE",
    Vg => "VG", Vi => "VI", Vn => "VN", Vu => "VU", Wf => "WF", Ws => "WS", Xk => "XK",
    Ye => "YE", Yt => "YT", Za => "ZA", Zm => "ZM", Zw => "ZW",
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Market {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Market::from_code(s)
    }
}

impl Serialize for Market {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Market {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Market::from_code(&code).map_err(serde::de::Error::custom)
    }
}

/// Map raw codes to markets, failing on the first unknown code.
pub fn parse_markets<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Market>, ModelError> {
    codes.iter().map(|c| Market::from_code(c.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_markets() {
        let markets = parse_markets(&["US", "CA"]).unwrap();
        assert_eq!(markets, vec![Market::Us, Market::Ca]);
    }

    #[test]
    fn test_unknown_market_is_an_error() {
        let err = parse_markets(&["US", "ZZ"]).unwrap_err();
        assert_eq!(err, ModelError::UnknownMarket("ZZ".to_string()));
    }

    #[test]
    fn test_code_roundtrip_for_every_market() {
        for market in Market::ALL {
            assert_eq!(Market::from_code(market.code()), Ok(*market));
        }
    }

    #[test]
    fn test_full_iso_table() {
        assert_eq!(Market::ALL.len(), 250);
        for code in ["AI", "VA", "GL", "AQ", "RU", "CN"] {
            assert_eq!(Market::from_code(code).map(|m| m.code()), Ok(code));
        }
        for code in ["ZZ", "EU", "UK", "XX"] {
            assert!(Market::from_code(code).is_err(), "{} should be unknown", code);
        }
    }

    #[test]
    fn test_lowercase_code_rejected() {
        assert!(Market::from_code("us").is_err());
    }

    #[test]
    fn test_deserialize_market_list() {
        let markets: Vec<Market> = serde_json::from_str(r#"["GB","XK"]"#).unwrap();
        assert_eq!(markets, vec![Market::Gb, Market::Xk]);

        let err = serde_json::from_str::<Vec<Market>>(r#"["GB","ZZ"]"#).unwrap_err();
        assert!(err.to_string().contains("unknown market code"));
    }
}
