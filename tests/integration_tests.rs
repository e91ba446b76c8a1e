// Integration tests for the generation pipeline and the Jest runner wrapper, driven by the
// sample collection under tests/samples.

#[cfg(test)]
mod tests {
    use collection_test_generator::{
        generate_from_collection,
        parser::{flatten_items, load_collection, variable_map},
        BearerToken, GeneratorConfig,
    };
    use std::fs;
    use std::path::{Path, PathBuf};

    fn get_test_data_path(file_name: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests");
        path.push("samples");
        path.push(file_name);
        path
    }

    fn generate_into(out: &Path) -> collection_test_generator::GenerationSummary {
        let collection = get_test_data_path("sample_collection.json");
        let config = GeneratorConfig::new(collection, BearerToken::new("fresh-token"))
            .with_output_dirs(out.join("dtos"), out.join("tests").join("generated"));
        generate_from_collection(&config).unwrap()
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_load_and_flatten_sample_collection() {
        let collection = load_collection(get_test_data_path("sample_collection.json")).unwrap();
        assert_eq!(collection.info.as_ref().unwrap().name, "Travel Admin API");

        let vars = variable_map(&collection.variable);
        let requests = flatten_items(collection.item.as_deref().unwrap(), &vars);
        let names: Vec<&str> = requests.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(
            names,
            [
                "Client Google Places",
                "Reports Payment Method Breakdown",
                "Bookings Create booking",
                "Bookings Get booking",
                "Bookings Broken body",
                "Unresolved",
            ]
        );
        assert_eq!(
            requests[1].url,
            "https://api.travel.test/reports/payment-method-breakdown?lang=en"
        );
    }

    #[test]
    fn test_generate_writes_dtos_and_tests() {
        let out = tempfile::tempdir().unwrap();
        let summary = generate_into(out.path());

        assert_eq!(
            file_names(&summary.dto_files),
            ["GooglePlaces.dto.js", "PaymentMethodBreakdown.dto.js", "Bookings.dto.js"]
        );
        assert_eq!(
            file_names(&summary.test_files),
            [
                "GooglePlaces.test.js",
                "PaymentMethodBreakdown.test.js",
                "Bookings.test.js",
                "Bookings2.test.js",
                "Notes.test.js",
            ]
        );
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.auth_headers_rewritten, 3);
    }

    #[test]
    fn test_generated_dto_content() {
        let out = tempfile::tempdir().unwrap();
        generate_into(out.path());

        let places =
            fs::read_to_string(out.path().join("dtos").join("GooglePlaces.dto.js")).unwrap();
        assert_eq!(
            places,
            "// Auto-generated DTO for GooglePlaces\n\
             exports.Output = expect.objectContaining({ \"predictions\": expect.arrayContaining([expect.objectContaining({ \"description\": expect.any(String), \"place_id\": expect.any(String), \"types\": expect.arrayContaining([expect.any(String)]) })]), \"status\": expect.any(String) });\n"
        );

        let bookings = fs::read_to_string(out.path().join("dtos").join("Bookings.dto.js")).unwrap();
        assert!(bookings.contains(
            "exports.Input = expect.objectContaining({ \"tripId\": expect.any(Number), \"seats\": expect.arrayContaining([expect.any(String)]), \"passenger\": expect.objectContaining({ \"name\": expect.any(String), \"email\": expect.any(String) }) });"
        ));
        assert!(bookings.contains(
            "exports.Output = expect.objectContaining({ \"id\": expect.any(String), \"createdAt\": expect.any(String), \"confirmed\": expect.any(Boolean) });"
        ));
    }

    #[test]
    fn test_generated_test_content() {
        let out = tempfile::tempdir().unwrap();
        generate_into(out.path());
        let test_dir = out.path().join("tests").join("generated");

        let places = fs::read_to_string(test_dir.join("GooglePlaces.test.js")).unwrap();
        assert!(places.contains(
            "const { Output: GooglePlacesOutput } = require('../../dtos/GooglePlaces.dto');"
        ));
        assert!(places.contains(
            "describe('GET https://api.travel.test/client/google-places?input=London&empty=', () => {"
        ));
        assert!(places.contains("const res = await request('https://api.travel.test')"));
        assert!(places.contains(".get('/client/google-places?input=London')"));
        assert!(places.contains(
            r#".set({"Referer":"https://admin.travel.test/","User-Agent":"Mozilla/5.0 (X11; Linux x86_64)"});"#
        ));
        assert!(!places.contains("Cookie"));

        let report = fs::read_to_string(test_dir.join("PaymentMethodBreakdown.test.js")).unwrap();
        assert!(report.contains(r#""authorization":"Bearer fresh-token""#));
        assert!(!report.contains("recorded-token"));

        let create = fs::read_to_string(test_dir.join("Bookings.test.js")).unwrap();
        assert!(create.contains(
            "const { Input: BookingsInput, Output: BookingsOutput } = require('../../dtos/Bookings.dto');"
        ));
        assert!(create.contains(".post('/bookings')"));
        assert!(create.contains(".send(BookingsInput);"));
        assert!(create.contains("expect(res.body).toMatchObject(BookingsOutput);"));

        let get = fs::read_to_string(test_dir.join("Bookings2.test.js")).unwrap();
        assert!(!get.contains("require('../../dtos"));
        assert!(get.contains("expect(res.status).toBe(200);"));
        assert!(!get.contains("toMatchObject"));

        let notes = fs::read_to_string(test_dir.join("Notes.test.js")).unwrap();
        assert!(!notes.contains(".send("));
    }

    #[test]
    fn test_clean_removes_stale_generated_files() {
        let out = tempfile::tempdir().unwrap();
        let dto_dir = out.path().join("dtos");
        let test_dir = out.path().join("tests").join("generated");
        fs::create_dir_all(&dto_dir).unwrap();
        fs::create_dir_all(&test_dir).unwrap();
        fs::write(dto_dir.join("Stale.dto.js"), "").unwrap();
        fs::write(test_dir.join("Stale.test.js"), "").unwrap();
        fs::write(test_dir.join("keep.md"), "").unwrap();

        let collection = get_test_data_path("sample_collection.json");
        let mut config = GeneratorConfig::new(collection, BearerToken::new("t"))
            .with_output_dirs(&dto_dir, &test_dir);
        config.clean = true;
        generate_from_collection(&config).unwrap();

        assert!(!dto_dir.join("Stale.dto.js").exists());
        assert!(!test_dir.join("Stale.test.js").exists());
        assert!(test_dir.join("keep.md").exists());
        assert!(test_dir.join("GooglePlaces.test.js").exists());
    }

    #[test]
    fn test_collection_without_items_generates_nothing() {
        let out = tempfile::tempdir().unwrap();
        let collection = out.path().join("empty.json");
        fs::write(&collection, r#"{ "info": { "name": "Empty" } }"#).unwrap();

        let config = GeneratorConfig::new(&collection, BearerToken::new("t"))
            .with_output_dirs(out.path().join("dtos"), out.path().join("tests"));
        let summary = generate_from_collection(&config).unwrap();

        assert!(summary.dto_files.is_empty());
        assert!(summary.test_files.is_empty());
    }

    #[test]
    fn test_clean_applies_to_collection_without_items() {
        let out = tempfile::tempdir().unwrap();
        let collection = out.path().join("empty.json");
        fs::write(&collection, r#"{ "info": { "name": "Empty" } }"#).unwrap();
        let test_dir = out.path().join("tests");
        fs::create_dir_all(&test_dir).unwrap();
        fs::write(test_dir.join("Stale.test.js"), "").unwrap();

        let mut config = GeneratorConfig::new(&collection, BearerToken::new("t"))
            .with_output_dirs(out.path().join("dtos"), &test_dir);
        config.clean = true;
        let summary = generate_from_collection(&config).unwrap();

        assert!(summary.test_files.is_empty());
        assert!(!test_dir.join("Stale.test.js").exists());
    }

    #[test]
    fn test_invalid_collection_is_an_error() {
        let out = tempfile::tempdir().unwrap();
        let collection = out.path().join("broken.json");
        fs::write(&collection, "{ \"item\": [").unwrap();

        let config = GeneratorConfig::new(&collection, BearerToken::new("t"));
        let err = generate_from_collection(&config).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
