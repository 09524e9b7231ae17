//! 브레이즈드 판형 열교환기 모델 카탈로그 (XB 시리즈).
//! 값은 제조사 카탈로그 기준의 참고치이며 최종 선정은 제조사 프로그램으로 확인해야 한다.

use serde::Serialize;

/// 카탈로그 모델 한 개.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogModel {
    /// 주문 코드
    pub code: &'static str,
    /// 시리즈 (XB25R, XB26R, ...)
    pub series: &'static str,
    /// 판 수
    pub plates: u32,
    /// 전열 면적 [m²]
    pub area_m2: f64,
    /// 질량 [kg]
    pub mass_kg: f64,
    /// 접속 규격 (G¾, G1, G2)
    pub connection: &'static str,
    /// 최고 사용 압력 PN [bar]
    pub pressure_bar: f64,
    /// 최고 사용 온도 [°C]
    pub max_temp_c: f64,
}

#[allow(clippy::too_many_arguments)]
const fn model(
    code: &'static str,
    series: &'static str,
    plates: u32,
    area_m2: f64,
    mass_kg: f64,
    connection: &'static str,
    pressure_bar: f64,
    max_temp_c: f64,
) -> CatalogModel {
    CatalogModel {
        code,
        series,
        plates,
        area_m2,
        mass_kg,
        connection,
        pressure_bar,
        max_temp_c,
    }
}

/// 카탈로그 전체. 시리즈별, 판 수 순으로 정렬돼 있다.
pub fn models() -> &'static [CatalogModel] {
    MODELS
}

/// 주문 코드로 모델을 찾는다. 대소문자는 구분하지 않는다.
pub fn find_model(code: &str) -> Option<&'static CatalogModel> {
    MODELS.iter().find(|m| m.code.eq_ignore_ascii_case(code.trim()))
}

/// 시리즈에 속한 모델들.
pub fn series_models<'a>(series: &'a str) -> impl Iterator<Item = &'static CatalogModel> + 'a {
    MODELS
        .iter()
        .filter(move |m| m.series.eq_ignore_ascii_case(series))
}

const MODELS: &[CatalogModel] = &[
    // XB25R
    model("004B2037R", "XB25R", 10, 0.22, 1.86, "G¾", 30.0, 225.0),
    model("004B2038R", "XB25R", 16, 0.39, 2.4, "G¾", 30.0, 225.0),
    model("004B2039R", "XB25R", 20, 0.5, 2.76, "G¾", 30.0, 225.0),
    model("004B2041R", "XB25R", 26, 0.67, 3.3, "G¾", 30.0, 225.0),
    model("004B2042R", "XB25R", 30, 0.78, 3.66, "G¾", 30.0, 225.0),
    model("004B2043R", "XB25R", 36, 0.95, 4.2, "G¾", 30.0, 225.0),
    model("004B2044R", "XB25R", 40, 1.06, 4.56, "G¾", 30.0, 225.0),
    model("004B2046R", "XB25R", 50, 1.34, 5.46, "G¾", 30.0, 225.0),
    model("004B2047R", "XB25R", 60, 1.62, 6.36, "G¾", 30.0, 225.0),
    model("004B2048R", "XB25R", 70, 1.9, 7.26, "G¾", 30.0, 225.0),
    // XB26R
    model("004B2025R", "XB26R", 10, 0.26, 2.37, "G¾", 30.0, 225.0),
    model("004B2026R", "XB26R", 16, 0.45, 3.03, "G¾", 30.0, 225.0),
    model("004B2027R", "XB26R", 20, 0.58, 3.47, "G¾", 30.0, 225.0),
    model("004B2028R", "XB26R", 26, 0.77, 4.13, "G¾", 30.0, 225.0),
    model("004B2029R", "XB26R", 30, 0.9, 4.57, "G¾", 30.0, 225.0),
    model("004B2030R", "XB26R", 36, 1.09, 5.23, "G¾", 30.0, 225.0),
    model("004B2031R", "XB26R", 40, 1.22, 5.67, "G¾", 30.0, 225.0),
    model("004B2032R", "XB26R", 50, 1.54, 6.77, "G¾", 30.0, 225.0),
    model("004B2033R", "XB26R", 60, 1.86, 7.87, "G¾", 30.0, 225.0),
    model("004B2034R", "XB26R", 70, 2.18, 8.97, "G¾", 30.0, 225.0),
    // XB30R
    model("004H7555R", "XB30R", 10, 0.32, 2.64, "G¾", 30.0, 225.0),
    model("004H7556R", "XB30R", 16, 0.56, 3.42, "G¾", 30.0, 225.0),
    model("004H7557R", "XB30R", 20, 0.72, 3.94, "G¾", 30.0, 225.0),
    model("004H7558R", "XB30R", 26, 0.96, 4.72, "G¾", 30.0, 225.0),
    model("004H7559R", "XB30R", 30, 1.12, 5.24, "G¾", 30.0, 225.0),
    model("004H7560R", "XB30R", 36, 1.36, 6.02, "G¾", 30.0, 225.0),
    model("004H7561R", "XB30R", 40, 1.52, 6.54, "G¾", 30.0, 225.0),
    model("004H7562R", "XB30R", 50, 1.92, 7.84, "G¾", 30.0, 225.0),
    model("004H7563R", "XB30R", 60, 2.32, 9.14, "G¾", 30.0, 225.0),
    model("004H7564R", "XB30R", 70, 2.72, 10.44, "G¾", 30.0, 225.0),
    model("004H7565R", "XB30R", 80, 3.12, 11.74, "G¾", 30.0, 225.0),
    model("004H7566R", "XB30R", 90, 3.52, 13.04, "G¾", 30.0, 225.0),
    model("004H7567R", "XB30R", 100, 3.92, 14.34, "G¾", 30.0, 225.0),
    model("004H7568R", "XB30R", 110, 4.32, 15.64, "G¾", 30.0, 225.0),
    model("004H7569R", "XB30R", 120, 4.72, 16.94, "G¾", 30.0, 225.0),
    model("004H7570R", "XB30R", 140, 5.52, 19.54, "G¾", 30.0, 225.0),
    // XB60R
    model("004H7300R", "XB60R", 10, 0.53, 3.9, "G1", 30.0, 225.0),
    model("004H7301R", "XB60R", 16, 0.92, 5.16, "G1", 30.0, 225.0),
    model("004H7302R", "XB60R", 20, 1.19, 6.0, "G1", 30.0, 225.0),
    model("004H7303R", "XB60R", 26, 1.58, 7.26, "G1", 30.0, 225.0),
    model("004H7304R", "XB60R", 30, 1.85, 8.1, "G1", 30.0, 225.0),
    model("004H7305R", "XB60R", 36, 2.24, 9.36, "G1", 30.0, 225.0),
    model("004H7306R", "XB60R", 40, 2.51, 10.2, "G1", 30.0, 225.0),
    model("004H7307R", "XB60R", 50, 3.17, 12.3, "G1", 30.0, 225.0),
    model("004H7308R", "XB60R", 60, 3.83, 14.4, "G1", 30.0, 225.0),
    model("004H7309R", "XB60R", 70, 4.49, 16.5, "G1", 30.0, 225.0),
    model("004H7310R", "XB60R", 80, 5.15, 18.6, "G1", 30.0, 225.0),
    model("004H7311R", "XB60R", 90, 5.81, 20.7, "G1", 30.0, 225.0),
    model("004H7312R", "XB60R", 100, 6.47, 22.8, "G1", 30.0, 225.0),
    model("004H7313R", "XB60R", 110, 7.13, 24.9, "G1", 30.0, 225.0),
    model("004H7314R", "XB60R", 120, 7.79, 27.0, "G1", 30.0, 225.0),
    // XB95R
    model("004B1920R", "XB95R", 30, 3.08, 15.44, "G2", 30.0, 225.0),
    model("004B1921R", "XB95R", 36, 3.74, 17.62, "G2", 30.0, 225.0),
    model("004B1922R", "XB95R", 40, 4.18, 19.08, "G2", 30.0, 225.0),
    model("004B1923R", "XB95R", 50, 5.28, 22.72, "G2", 30.0, 225.0),
    model("004B1932R", "XB95R", 60, 6.38, 26.36, "G2", 30.0, 225.0),
    model("004B1933R", "XB95R", 70, 7.48, 30.0, "G2", 30.0, 225.0),
    model("004B1934R", "XB95R", 80, 8.58, 33.64, "G2", 30.0, 225.0),
    model("004B1936R", "XB95R", 90, 9.68, 37.28, "G2", 30.0, 225.0),
    model("004B1937R", "XB95R", 100, 10.78, 40.92, "G2", 30.0, 225.0),
    model("004B1938R", "XB95R", 110, 11.88, 44.56, "G2", 30.0, 225.0),
    model("004B1939R", "XB95R", 120, 12.98, 48.2, "G2", 30.0, 225.0),
    model("004B1940R", "XB95R", 140, 15.18, 55.48, "G2", 30.0, 225.0),
    model("004B1941R", "XB95R", 160, 17.38, 62.76, "G2", 30.0, 225.0),
    model("004B1942R", "XB95R", 180, 19.58, 70.04, "G2", 30.0, 225.0),
    model("004B1943R", "XB95R", 200, 21.78, 77.32, "G2", 30.0, 225.0),
    // XB120R
    model("004B1925R", "XB120R", 30, 3.92, 19.81, "G2", 30.0, 225.0),
    model("004B1926R", "XB120R", 36, 4.76, 22.4, "G2", 30.0, 225.0),
    model("004B1927R", "XB120R", 40, 5.32, 24.12, "G2", 30.0, 225.0),
    model("004B1928R", "XB120R", 50, 6.72, 28.43, "G2", 30.0, 225.0),
    model("004B1929R", "XB120R", 60, 8.12, 32.74, "G2", 30.0, 225.0),
    model("004B1930R", "XB120R", 70, 9.52, 37.05, "G2", 30.0, 225.0),
    model("004B1931R", "XB120R", 80, 10.92, 41.36, "G2", 30.0, 225.0),
    model("004B3452R", "XB120R", 90, 12.32, 45.67, "G2", 30.0, 225.0),
    model("004B3453R", "XB120R", 100, 13.72, 49.98, "G2", 30.0, 225.0),
    model("004B3454R", "XB120R", 110, 15.12, 54.29, "G2", 30.0, 225.0),
    model("004B3455R", "XB120R", 120, 16.52, 55.6, "G2", 30.0, 225.0),
    model("004B3456R", "XB120R", 140, 19.32, 67.22, "G2", 30.0, 225.0),
    model("004B3457R", "XB120R", 160, 22.12, 75.84, "G2", 30.0, 225.0),
    model("004B3458R", "XB120R", 180, 24.92, 84.46, "G2", 30.0, 225.0),
    model("004B3459R", "XB120R", 200, 27.72, 93.08, "G2", 30.0, 225.0),
];
