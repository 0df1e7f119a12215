mod track_record;
